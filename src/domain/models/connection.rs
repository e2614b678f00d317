//! Connection Domain Model
//!
//! Connection parameters, the dialect scheme and the rendered connection URL.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use serde::Deserialize;
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::shared::errors::ConnectionError;

/// Hostnames, IPv4 literals and bracketed IPv6 literals
static HOST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\[[0-9A-Fa-f:.]+\]|[A-Za-z0-9._-]+)$").expect("valid regex"));

/// RFC 3986 userinfo characters that must be escaped
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters that would end or split the database path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const REDACTED_PASSWORD: &str = "***";

/// Database password, wiped from memory on drop
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the plaintext value
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Parameters needed to address the database server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ConnectionParameters {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,

    pub password: Password,

    #[validate(length(min = 1, message = "host must not be empty"))]
    #[validate(regex(path = *HOST_REGEX, message = "host must be a hostname or IP literal"))]
    pub host: String,

    #[validate(range(min = 1, message = "port must be between 1 and 65535"))]
    pub port: u16,

    #[validate(length(min = 1, max = 64, message = "database must be 1 to 64 characters"))]
    pub database: String,
}

impl Default for ConnectionParameters {
    /// The `online_shop_2024` development database on a local server
    fn default() -> Self {
        Self {
            username: "root".to_string(),
            password: Password::new("1433"),
            host: "localhost".to_string(),
            port: 3306,
            database: "online_shop_2024".to_string(),
        }
    }
}

/// Scheme naming the database engine and, optionally, the driver dialect
///
/// Rendered as `engine` or `engine+driver`, e.g. `mysql+pymysql`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Dialect {
    engine: String,
    driver: Option<String>,
}

impl Dialect {
    /// Create a dialect from its parts
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::InvalidDialect` if a part is empty or contains
    /// characters outside `[a-z0-9_]`.
    pub fn new(engine: &str, driver: Option<&str>) -> Result<Self, ConnectionError> {
        let valid = |part: &str| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        };

        if !valid(engine) || !driver.is_none_or(valid) {
            let rendered = match driver {
                Some(driver) => format!("{engine}+{driver}"),
                None => engine.to_string(),
            };
            return Err(ConnectionError::InvalidDialect(rendered));
        }

        Ok(Self {
            engine: engine.to_string(),
            driver: driver.map(str::to_string),
        })
    }

    #[must_use]
    pub fn engine(&self) -> &str {
        &self.engine
    }

    #[must_use]
    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            engine: "mysql".to_string(),
            driver: Some("pymysql".to_string()),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.driver {
            Some(driver) => write!(f, "{}+{}", self.engine, driver),
            None => f.write_str(&self.engine),
        }
    }
}

impl FromStr for Dialect {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('+') {
            Some((engine, driver)) => Self::new(engine, Some(driver)),
            None => Self::new(s, None),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = ConnectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Rendered `<scheme>://<username>:<password>@<host>:<port>/<database>` string
///
/// Username and password are percent-encoded with the userinfo set and the
/// database with the path-segment set; the host is emitted as given and must
/// already be validated.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUrl {
    dialect: Dialect,
    value: String,
    redacted: String,
}

impl ConnectionUrl {
    /// Format the connection URL for `params` under `dialect`
    #[must_use]
    pub fn new(dialect: &Dialect, params: &ConnectionParameters) -> Self {
        let username = utf8_percent_encode(&params.username, USERINFO);
        let password = utf8_percent_encode(params.password.expose(), USERINFO);
        let database = utf8_percent_encode(&params.database, PATH_SEGMENT);
        let location = format!("{}:{}/{}", params.host, params.port, database);

        Self {
            dialect: dialect.clone(),
            value: format!("{dialect}://{username}:{password}@{location}"),
            redacted: format!("{dialect}://{username}:{REDACTED_PASSWORD}@{location}"),
        }
    }

    /// The exact connection string, credentials included
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The connection string with the password masked, safe for logs
    #[must_use]
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    #[must_use]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Everything after `<scheme>://`
    #[must_use]
    pub fn without_scheme(&self) -> &str {
        self.value
            .split_once("://")
            .map_or(self.value.as_str(), |(_, rest)| rest)
    }
}

impl fmt::Debug for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUrl").field(&self.redacted).finish()
    }
}

impl Drop for ConnectionUrl {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
