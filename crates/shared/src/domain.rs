use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_newtype!(UserId);
id_newtype!(PostId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A collaborator response that may arrive as one record or a list.
///
/// The loose shape stops here: callers normalize with [`OneOrMany::into_vec`]
/// before any data reaches a renderer, so the ambiguity never leaks past the
/// lookup boundary. `Many` is tried first so a JSON array always decodes as a
/// list, even when it holds a single element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_body_decodes_as_many() {
        let decoded: OneOrMany<Post> = serde_json::from_str(
            r#"[{"id":1,"userId":42,"title":"T1","body":"b"},
                {"id":2,"userId":42,"title":"T2","body":"b"}]"#,
        )
        .expect("decode");
        assert_eq!(decoded.len(), 2);
        let titles: Vec<_> = decoded.into_vec().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, ["T1", "T2"]);
    }

    #[test]
    fn single_object_body_decodes_as_one() {
        let decoded: OneOrMany<Post> =
            serde_json::from_str(r#"{"id":7,"userId":42,"title":"only","body":"b"}"#)
                .expect("decode");
        let posts = decoded.into_vec();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, PostId(7));
    }

    #[test]
    fn empty_array_normalizes_to_empty_vec() {
        let decoded: OneOrMany<Post> = serde_json::from_str("[]").expect("decode");
        assert!(decoded.is_empty());
        assert!(decoded.into_vec().is_empty());
    }

    #[test]
    fn single_element_array_stays_a_list() {
        let decoded: OneOrMany<Post> =
            serde_json::from_str(r#"[{"id":1,"userId":1,"title":"t","body":"b"}]"#)
                .expect("decode");
        assert!(matches!(decoded, OneOrMany::Many(_)));
        assert_eq!(decoded.len(), 1);
    }
}
