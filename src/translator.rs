//! Turns transport failures into text a user can read.

use crate::{
    error::{ErrorClass, TransportError},
    i18n::{Params, Translate},
};

/// Localized message for a failed session call.
pub fn error_message<T>(outcome: &TransportError, translate: &T) -> String
where
    T: Translate + ?Sized,
{
    status_message(outcome.status(), translate)
}

/// Localized message for a failure with the given HTTP status, `None` meaning
/// the server could not be reached.
pub fn status_message<T>(status: Option<u16>, translate: &T) -> String
where
    T: Translate + ?Sized,
{
    let class = ErrorClass::classify(status);
    let params = match class {
        ErrorClass::OtherHttpError { code } => Params::new().with("code", code),
        _ => Params::new(),
    };
    translate.translate(class.message_key().as_str(), &params)
}
