//! Request size limits shared by the diff and suggestion endpoints.

use crate::config::Config;
use crate::errors::AppError;

/// Rejects text longer than `config.max_content_chars` characters.
pub fn check_text_len(field: &str, text: &str, config: &Config) -> Result<(), AppError> {
    let chars = text.chars().count();
    if chars > config.max_content_chars {
        return Err(AppError::Validation(format!(
            "{field} is {chars} characters; the limit is {}",
            config.max_content_chars
        )));
    }
    Ok(())
}

/// Rejects lists with too many items or any over-long item.
pub fn check_bullets(field: &str, bullets: &[String], config: &Config) -> Result<(), AppError> {
    if bullets.len() > config.max_bullets {
        return Err(AppError::Validation(format!(
            "{field} has {} items; the limit is {}",
            bullets.len(),
            config.max_bullets
        )));
    }
    for (index, bullet) in bullets.iter().enumerate() {
        check_text_len(&format!("{field}[{index}]"), bullet, config)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        anthropic_api_key: "test-key".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        max_content_chars: 40,
        max_bullets: 3,
    }
}
