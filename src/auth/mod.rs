pub mod password;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SecurityConfig;

/// Token payload: the user id plus issue/expiry timestamps
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: user_id,
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidToken(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidToken(msg) => write!(f, "Invalid JWT token: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

/// Issues and verifies HS256 identity tokens over a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, JwtError> {
        Self::new(&security.jwt_secret, Duration::hours(security.jwt_expiry_hours as i64))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, JwtError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Sign a token as if issued at `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::new(user_id, issued_at, self.ttl);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Check signature and expiry, returning the user id carried by the token
    pub fn verify(&self, token: &str) -> Result<Uuid, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::days(30)).unwrap()
    }

    #[test]
    fn issued_token_carries_user_id() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn token_is_valid_until_thirty_days() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let almost_expired = tokens.issue_at(user_id, Utc::now() - Duration::days(29)).unwrap();
        assert_eq!(tokens.verify(&almost_expired).unwrap(), user_id);

        let expired = tokens.issue_at(user_id, Utc::now() - Duration::days(31)).unwrap();
        assert!(matches!(tokens.verify(&expired), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new("other-secret", Duration::days(30)).unwrap();
        let token = other.issue(Uuid::new_v4()).unwrap();

        assert!(service().verify(&token).is_err());
        assert!(service().verify("not.a.token").is_err());
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(
            TokenService::new("", Duration::days(30)),
            Err(JwtError::InvalidSecret)
        ));
    }

    #[test]
    fn ttl_comes_from_config() {
        let security = SecurityConfig {
            enable_cors: true,
            jwt_secret: "s".to_string(),
            jwt_expiry_hours: 720,
        };
        assert_eq!(TokenService::from_config(&security).unwrap().ttl(), Duration::days(30));
    }
}
