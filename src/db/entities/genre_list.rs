use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered genre names, stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct GenreList(pub Vec<String>);

impl GenreList {
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(genres.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for GenreList {
    fn from(genres: Vec<String>) -> Self {
        Self(genres)
    }
}

#[cfg(test)]
mod tests {
    use super::GenreList;

    #[test]
    fn serializes_as_plain_json_array() {
        let genres = GenreList::new(["Jazz", "Reggae"]);

        let json = serde_json::to_string(&genres).expect("genres should serialize");

        assert_eq!(json, r#"["Jazz","Reggae"]"#);
    }

    #[test]
    fn keeps_order_when_read_back() {
        let stored = r#"["Swing","Jazz","Blues"]"#;

        let genres: GenreList = serde_json::from_str(stored).expect("genres should deserialize");

        assert_eq!(genres.as_slice(), ["Swing", "Jazz", "Blues"]);
    }
}
