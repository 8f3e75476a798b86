use core::fmt;

#[derive(Debug)]
pub enum NavErrorKind {
    /// Error with the navigation tree
    Tree,
    /// Render error
    Render,
    /// Error while reading a navigation config
    Config,
    /// Access control denied harder than expected
    Acl,
}

#[derive(Debug)]
pub struct NavError {
    message: String,
    context: Option<String>,
    kind: NavErrorKind,
}
impl NavError {
    pub fn new<S: Into<String>>(message: S, kind: NavErrorKind) -> NavError {
        NavError {
            message: message.into(),
            kind,
            context: None,
        }
    }

    pub fn tree<S: Into<String>>(message: S) -> NavError {
        Self::new(message, NavErrorKind::Tree)
    }

    pub fn render<S: Into<String>>(message: S) -> NavError {
        Self::new(message, NavErrorKind::Render)
    }

    pub fn acl<S: Into<String>>(message: S) -> NavError {
        Self::new(message, NavErrorKind::Acl)
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
impl From<toml::de::Error> for NavError {
    fn from(error: toml::de::Error) -> Self {
        Self::new(error.to_string(), NavErrorKind::Config)
    }
}

impl fmt::Display for NavErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            NavErrorKind::Tree => "tree",
            NavErrorKind::Render => "render",
            NavErrorKind::Config => "config",
            NavErrorKind::Acl => "acl",
        };
        write!(f, "{kind}")
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context = if let Some(context) = &self.context {
            format!("with context '{context}'")
        } else {
            "".into()
        };
        write!(
            f,
            "Navigation {} error: '{}' {context}",
            self.kind, self.message
        )
    }
}
