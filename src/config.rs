use anyhow::{Context, Result};

/// Interface address the server binds when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// TCP port the server binds when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8085;

/// # Server Configuration
///
/// Bind address for the HTTP listener, resolved once at process start and
/// immutable afterwards.
///
/// ## Sources
/// - `HOST`: interface address, defaults to `0.0.0.0`
/// - `PORT`: TCP port, defaults to `8085`
///
/// Variables may come from the process environment or from a `.env` file in
/// the working directory (loaded first, ignored if missing).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads the bind address from the environment, applying defaults for
    /// unset variables.
    ///
    /// A `PORT` value that does not parse as a TCP port is a fatal startup
    /// fault and surfaces as an error rather than falling back to the
    /// default.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(ServerConfig {
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid TCP port number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test function: these cases mutate process-wide environment
    // variables and must not run concurrently with each other.
    #[test]
    fn test_from_env_defaults_and_overrides() {
        unsafe {
            std::env::remove_var("HOST");
            std::env::remove_var("PORT");
        }

        let config = ServerConfig::from_env().expect("defaults should load");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);

        unsafe {
            std::env::set_var("HOST", "127.0.0.1");
            std::env::set_var("PORT", "9000");
        }

        let config = ServerConfig::from_env().expect("overrides should load");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);

        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }

        let result = ServerConfig::from_env();
        assert!(result.is_err(), "non-numeric PORT should be rejected");

        unsafe {
            std::env::set_var("PORT", "70000");
        }

        let result = ServerConfig::from_env();
        assert!(result.is_err(), "out-of-range PORT should be rejected");

        unsafe {
            std::env::remove_var("HOST");
            std::env::remove_var("PORT");
        }
    }
}
