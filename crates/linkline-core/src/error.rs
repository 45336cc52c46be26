pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required attribute: {name}")]
    MissingAttribute { name: &'static str },

    #[error("No element found for id: {id}")]
    ElementNotFound { id: String },
}
