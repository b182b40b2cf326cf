//! Auth0 액세스 토큰 클레임

use serde::{Deserialize, Serialize};

/// `aud` 클레임은 문자열 하나 또는 배열로 올 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

/// Auth0가 발급한 RBAC 액세스 토큰의 클레임
///
/// `permissions`는 Auth0 API 설정에서 "Add Permissions in the Access Token"을
/// 활성화했을 때만 포함됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Claims {
    /// Subject: Auth0 사용자 ID (예: "auth0|5f1c...")
    pub sub: String,

    /// Issuer: `https://{domain}/`
    #[serde(default)]
    pub iss: Option<String>,

    /// Audience
    #[serde(default)]
    pub aud: Option<Audience>,

    /// Issued At (Unix timestamp)
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 부여된 권한 목록 (예: "get:drinks-detail")
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl Auth0Claims {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|granted| granted.iter().any(|p| p == permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_audience_string_or_list() {
        let single: Auth0Claims = serde_json::from_value(json!({
            "sub": "auth0|barista", "exp": 1, "aud": "coffee"
        }))
        .unwrap();
        assert_eq!(single.aud, Some(Audience::One("coffee".to_string())));

        let many: Auth0Claims = serde_json::from_value(json!({
            "sub": "auth0|barista", "exp": 1,
            "aud": ["coffee", "https://dev-bq85-qwa.us.auth0.com/userinfo"]
        }))
        .unwrap();
        assert!(matches!(many.aud, Some(Audience::Many(ref values)) if values.len() == 2));
    }

    #[test]
    fn test_permissions_claim() {
        let claims: Auth0Claims = serde_json::from_value(json!({
            "sub": "auth0|barista",
            "exp": 1,
            "permissions": ["get:drinks-detail"]
        }))
        .unwrap();

        assert!(claims.has_permission("get:drinks-detail"));
        assert!(!claims.has_permission("post:drinks"));
    }

    #[test]
    fn test_missing_permissions_claim() {
        let claims: Auth0Claims =
            serde_json::from_value(json!({ "sub": "auth0|guest", "exp": 1 })).unwrap();

        assert!(claims.permissions.is_none());
        assert!(!claims.has_permission("get:drinks-detail"));
    }
}
