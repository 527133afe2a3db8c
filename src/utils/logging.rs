use tracing::info;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// installs the global fmt subscriber, a second call returns an error
pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.max_level()?)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time();
    let res = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::validation(
        format!("tracing already initialized {:?}", err).as_str(), None))?;
    info!(branch_id = %config.branch_id, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::utils::logging::setup_tracing;

    #[tokio::test]
    async fn test_should_reject_bad_level_before_install() {
        let mut config = Configuration::new("test");
        config.log_level = "chatty".to_string();
        assert!(matches!(setup_tracing(&config), Err(LibraryError::Validation{ .. })));
    }

    #[tokio::test]
    async fn test_should_setup_tracing_once() {
        let config = Configuration::new("test");
        setup_tracing(&config).expect("should install subscriber");
        assert!(matches!(setup_tracing(&config), Err(LibraryError::Validation{ .. })));
    }
}
