use thiserror::Error;

/// Fatal start-up failures, one variant per subsystem. Anything that can go
/// wrong after initialization either cannot fail or degrades in place (a
/// broken sound asset only disables its effect).
#[derive(Debug, Error)]
pub enum InitError {
    #[error("asset directory `{path}` is missing")]
    Assets { path: String },

    #[error("failed to load font `{path}`: {message}")]
    Font { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_failing_subsystem() {
        let err = InitError::Assets {
            path: "assets".to_owned(),
        };
        assert_eq!(err.to_string(), "asset directory `assets` is missing");

        let err = InitError::Font {
            path: "assets/fonts/DejaVuSans.ttf".to_owned(),
            message: "no such file".to_owned(),
        };
        assert!(err.to_string().contains("DejaVuSans.ttf"));
        assert!(err.to_string().contains("no such file"));
    }
}
