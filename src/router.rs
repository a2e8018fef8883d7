//! Maps the three screens to their paths.

use crate::models::QuestionId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Detail(QuestionId),
}

impl Route {
    /// `/`, `/questions/new` and `/questions/{id}`; anything else is `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Route::List);
        }

        let rest = path.strip_prefix("/questions/")?;
        match rest {
            "" => None,
            "new" => Some(Route::Create),
            id if id.contains('/') => None,
            id => {
                let id = urlencoding::decode(id).ok()?;
                Some(Route::Detail(QuestionId::new(id.into_owned())))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Create => "/questions/new".to_string(),
            Route::Detail(id) => format!("/questions/{}", urlencoding::encode(id.as_str())),
        }
    }
}
