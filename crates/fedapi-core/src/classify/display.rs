//! User-facing text for classified errors.

use super::categorize::categorize_error;
use super::kind::ErrorCategory;
use super::parse::ApiError;

/// `"{user_message}: {raw}"` when the server said something more specific,
/// otherwise the category's `user_message` alone.
pub fn format_error_for_display(error: &ApiError, category: &ErrorCategory) -> String {
    if error.message == category.user_message {
        category.user_message.to_string()
    } else {
        format!("{}: {}", category.user_message, error.message)
    }
}

pub fn create_user_friendly_message(error: &ApiError) -> String {
    format_error_for_display(error, categorize_error(error).category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ErrorKind;

    #[test]
    fn identical_message_is_not_repeated() {
        let cat = ErrorKind::Authentication.category();
        let err = ApiError::new(401, cat.user_message);
        assert_eq!(format_error_for_display(&err, cat), "Please log in again to continue.");
    }

    #[test]
    fn specific_message_is_appended() {
        let cat = ErrorKind::ServerError.category();
        let err = ApiError::new(500, "DB down");
        assert_eq!(
            format_error_for_display(&err, cat),
            "Something went wrong on our end. Please try again later.: DB down"
        );
    }

    #[test]
    fn user_friendly_message_uses_status_category() {
        let err = ApiError::new(404, "Athlete 12 not found");
        assert_eq!(
            create_user_friendly_message(&err),
            "The requested item could not be found.: Athlete 12 not found"
        );
    }
}
