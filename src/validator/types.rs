use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    /// L'entrée brute n'est pas de l'UTF-8 valide; à rejeter avant
    /// construction, jamais convertie en sentinelle.
    #[error("input is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
