//! Student record types exchanged with the `/alunos` backend
//!
//! The form keeps every field as the text the user typed. The backend speaks
//! Portuguese field names and may return numbers either as JSON numbers or
//! as strings, so responses are normalised back to form text on the way in.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque student key taken from the route or from a create response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text_or_number(deserializer).map(StudentId)
    }
}

/// Editable state of the student form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    /// First photo of the record, display-only
    pub photo_url: Option<String>,
}

impl StudentForm {
    /// Request body for create and update calls
    pub fn payload(&self) -> StudentPayload {
        StudentPayload {
            nome: self.name.clone(),
            sobrenome: self.surname.clone(),
            email: self.email.clone(),
            idade: self.age.clone(),
            peso: self.weight.clone(),
            altura: self.height.clone(),
        }
    }
}

impl From<StudentResponse> for StudentForm {
    fn from(record: StudentResponse) -> Self {
        let photo_url = record.photo_url();
        Self {
            name: record.nome,
            surname: record.sobrenome,
            email: record.email,
            age: record.idade,
            weight: record.peso,
            height: record.altura,
            photo_url,
        }
    }
}

/// Body of `POST /alunos/` and `PUT /alunos/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentPayload {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub idade: String,
    pub peso: String,
    pub altura: String,
}

/// Photo entry attached to a student record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentPhoto {
    #[serde(default)]
    pub url: String,
}

/// Student record as returned by `GET /alunos/{id}` and `PUT /alunos/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StudentResponse {
    #[serde(default, deserialize_with = "text_or_number")]
    pub nome: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub sobrenome: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub idade: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub peso: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub altura: String,
    #[serde(rename = "Fotos", default)]
    pub fotos: Vec<StudentPhoto>,
}

impl StudentResponse {
    /// URL of the first photo, if the record has one
    pub fn photo_url(&self) -> Option<String> {
        self.fotos
            .first()
            .map(|photo| photo.url.clone())
            .filter(|url| !url.is_empty())
    }
}

/// Response of `POST /alunos/`; only the new key is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedStudent {
    pub id: StudentId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Integer(n)) => n.to_string(),
        Some(TextOrNumber::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_numbers_fills_form() {
        let json = r#"{
            "id": 7,
            "nome": "Maria",
            "sobrenome": "Silva",
            "email": "maria@example.com",
            "idade": 21,
            "peso": 58.5,
            "altura": 1.7,
            "Fotos": [{"url": "http://cdn/a.jpg"}, {"url": "http://cdn/b.jpg"}]
        }"#;

        let record: StudentResponse = serde_json::from_str(json).unwrap();

        let form = StudentForm::from(record);
        assert_eq!(form.name, "Maria");
        assert_eq!(form.surname, "Silva");
        assert_eq!(form.age, "21");
        assert_eq!(form.weight, "58.5");
        assert_eq!(form.height, "1.7");
        assert_eq!(form.photo_url.as_deref(), Some("http://cdn/a.jpg"));
    }

    #[test]
    fn test_response_with_string_numbers() {
        let json = r#"{"nome": "Ana", "sobrenome": "Costa", "email": "a@b.co",
                       "idade": "30", "peso": "70", "altura": "1.65"}"#;

        let form = StudentForm::from(serde_json::from_str::<StudentResponse>(json).unwrap());
        assert_eq!(form.age, "30");
        assert_eq!(form.weight, "70");
        assert_eq!(form.height, "1.65");
    }

    #[test]
    fn test_missing_photos_and_nulls() {
        let json = r#"{"nome": "Ana", "sobrenome": null, "email": "a@b.co", "Fotos": []}"#;

        let record: StudentResponse = serde_json::from_str(json).unwrap();
        assert!(record.photo_url().is_none());
        assert_eq!(record.sobrenome, "");
        assert_eq!(record.idade, "");

        let record: StudentResponse = serde_json::from_str(r#"{"nome": "Ana"}"#).unwrap();
        assert!(record.fotos.is_empty());
    }

    #[test]
    fn test_created_student_id_number_or_text() {
        let created: CreatedStudent = serde_json::from_str(r#"{"id": 42, "nome": "x"}"#).unwrap();
        assert_eq!(created.id.as_str(), "42");

        let created: CreatedStudent = serde_json::from_str(r#"{"id": "abc-1"}"#).unwrap();
        assert_eq!(created.id.to_string(), "abc-1");
    }

    #[test]
    fn test_payload_uses_backend_field_names() {
        let form = StudentForm {
            name: "Maria".into(),
            surname: "Silva".into(),
            email: "maria@example.com".into(),
            age: "21".into(),
            weight: "58.5".into(),
            height: "1.70".into(),
            photo_url: Some("http://cdn/a.jpg".into()),
        };

        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nome": "Maria",
                "sobrenome": "Silva",
                "email": "maria@example.com",
                "idade": "21",
                "peso": "58.5",
                "altura": "1.70",
            })
        );
    }
}
