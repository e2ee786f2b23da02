use anyhow::Result;
use inquire::InquireError;

mod report;
mod spinner;
mod style;

pub use report::{format_session_error, print_session_error, speech_fallback_notice};
pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub async fn handle_prompt_cancellation<F, Fut>(f: F) -> Result<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    match f().await {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_prompt_cancellation_ok() {
        let result = handle_prompt_cancellation(|| async { Ok(()) }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_handle_prompt_cancellation_operation_canceled() {
        let result =
            handle_prompt_cancellation(|| async { Err(InquireError::OperationCanceled.into()) })
                .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_handle_prompt_cancellation_operation_interrupted() {
        let result =
            handle_prompt_cancellation(|| async { Err(InquireError::OperationInterrupted.into()) })
                .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_handle_prompt_cancellation_other_error() {
        let result =
            handle_prompt_cancellation(|| async { Err(anyhow::anyhow!("Some other error")) })
                .await;
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Some other error"));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
