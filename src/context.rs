use crate::models::RequestKind;
use url::form_urlencoded;

/// Opaque credential handed over by the embedding host. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Keeps the credential out of debug logs.
impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(len={})", self.0.len())
    }
}

/// What the Telegram client injects into the page.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    pub init_data: Option<AuthToken>,
}

impl HostContext {
    pub fn new(init_data: Option<String>) -> Self {
        Self {
            init_data: init_data.and_then(AuthToken::new),
        }
    }

    pub fn outside_telegram() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub kind: RequestKind,
    pub init_data: Option<AuthToken>,
}

impl PageQuery {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut kind = None;
        let mut init_data = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "type" if kind.is_none() => kind = Some(value.into_owned()),
                "init_data" if init_data.is_none() => init_data = AuthToken::new(value.into_owned()),
                _ => {}
            }
        }

        Self {
            kind: RequestKind::from_param(kind.as_deref()),
            init_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_host_token_is_missing() {
        assert!(HostContext::new(Some(String::new())).init_data.is_none());
        assert!(HostContext::new(Some("abc".into())).init_data.is_some());
    }

    #[test]
    fn query_selects_kind() {
        assert_eq!(PageQuery::parse("type=subscription").kind, RequestKind::Subscription);
        assert_eq!(PageQuery::parse("?type=program").kind, RequestKind::Program);
        assert_eq!(PageQuery::parse("type=other").kind, RequestKind::Program);
        assert_eq!(PageQuery::parse("").kind, RequestKind::Program);
    }

    #[test]
    fn query_token_is_decoded() {
        let query = PageQuery::parse("init_data=user%3D1%26hash%3Dab");
        assert_eq!(query.init_data.unwrap().as_str(), "user=1&hash=ab");
    }

    #[test]
    fn debug_hides_token() {
        let token = AuthToken::new("secret").unwrap();
        assert_eq!(format!("{token:?}"), "AuthToken(len=6)");
    }
}
