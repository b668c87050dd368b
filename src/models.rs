//! Modelos de dominio: recomendaciones, respuestas del chatbot y la
//! clasificación de cualquier payload JSON en una forma renderizable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Campo identificador de una recomendación (nunca se muestra).
pub const ID_FIELD: &str = "ID";
/// Campo con el nombre del electrodoméstico (siempre es el título).
pub const NAME_FIELD: &str = "ElectroDomestico";
pub const ANSWER_FIELD: &str = "respuesta";
pub const RECOMMENDATIONS_FIELD: &str = "Recomendaciones";
pub const ERROR_FIELD: &str = "error";

pub const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados.";
pub const UNNAMED_ITEM: &str = "Sin nombre";

pub const MSG_INVALID_ID: &str = "Ingresa un ID válido";
pub const MSG_EMPTY_APPLIANCE: &str = "Ingresa el nombre de un electrodoméstico";
pub const MSG_EMPTY_QUESTION: &str = "Ingresa una pregunta para el chatbot";

/// Un par clave/valor ya filtrado y listo para mostrarse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Una recomendación: el registro tal y como lo envía la API, con el orden
/// de sus campos intacto.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    /// Cualquier valor que no sea un objeto se trata como un registro vacío.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn id(&self) -> Option<&Value> {
        self.fields.get(ID_FIELD)
    }

    pub fn name(&self) -> String {
        self.fields
            .get(NAME_FIELD)
            .filter(|v| is_truthy(v))
            .map(display_text)
            .unwrap_or_else(|| UNNAMED_ITEM.to_string())
    }

    /// Atributos visibles: todo salvo el ID, el nombre y los valores vacíos.
    pub fn display_attributes(&self) -> Vec<Attribute> {
        self.fields
            .iter()
            .filter(|(key, value)| {
                key.as_str() != ID_FIELD && key.as_str() != NAME_FIELD && is_truthy(value)
            })
            .map(|(key, value)| Attribute {
                key: key.clone(),
                value: display_text(value),
            })
            .collect()
    }
}

/// Respuesta del endpoint `/chatbot`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatbotAnswer {
    pub respuesta: String,
    pub recomendaciones: Vec<Item>,
}

/// Error listo para mostrarse, venga de la validación, del transporte o de
/// la propia API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn http_status(code: u16) -> Self {
        Self::new(format!("Error HTTP! status: {code}"))
    }
}

/// Las formas posibles de una respuesta, en orden de prioridad.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Error(ErrorResult),
    Empty,
    Chatbot(ChatbotAnswer),
    List(Vec<Item>),
    Single(Item),
}

impl QueryResult {
    /// Clasifica un payload arbitrario. El primer caso que encaja gana:
    /// vacío, error, chatbot, lista y, por último, recomendación única.
    pub fn from_payload(payload: Value) -> Self {
        let is_empty_list = matches!(&payload, Value::Array(items) if items.is_empty());
        if !is_truthy(&payload) || is_empty_list {
            return Self::Empty;
        }

        if let Some(error) = payload.get(ERROR_FIELD).filter(|v| is_truthy(v)) {
            return Self::Error(ErrorResult::new(display_text(error)));
        }

        let answer = payload.get(ANSWER_FIELD).filter(|v| is_truthy(v));
        let recommendations = payload.get(RECOMMENDATIONS_FIELD).filter(|v| is_truthy(v));
        if let (Some(answer), Some(recommendations)) = (answer, recommendations) {
            let recomendaciones = match recommendations {
                Value::Array(items) => items.iter().cloned().map(Item::from_value).collect(),
                Value::Object(_) => vec![Item::from_value(recommendations.clone())],
                _ => Vec::new(),
            };
            return Self::Chatbot(ChatbotAnswer {
                respuesta: display_text(answer),
                recomendaciones,
            });
        }

        match payload {
            Value::Array(items) => Self::List(items.into_iter().map(Item::from_value).collect()),
            other => Self::Single(Item::from_value(other)),
        }
    }
}

impl From<ErrorResult> for QueryResult {
    fn from(error: ErrorResult) -> Self {
        Self::Error(error)
    }
}

/// Veracidad al estilo de la API: `null`, `false`, `0` y `""` cuentan como
/// vacíos; listas y objetos nunca.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Texto de un valor escalar: cadenas tal cual, el resto en su forma JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attr(key: &str, value: &str) -> Attribute {
        Attribute {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn null_and_empty_list_are_both_empty() {
        assert_eq!(QueryResult::from_payload(Value::Null), QueryResult::Empty);
        assert_eq!(QueryResult::from_payload(json!([])), QueryResult::Empty);
        assert_eq!(QueryResult::from_payload(json!("")), QueryResult::Empty);
    }

    #[test]
    fn error_wins_over_everything_else() {
        let result = QueryResult::from_payload(json!({
            "error": "X",
            "respuesta": "hola",
            "Recomendaciones": [{"ElectroDomestico": "Nevera"}]
        }));
        assert_eq!(result, QueryResult::Error(ErrorResult::new("X")));
    }

    #[test]
    fn falsy_error_does_not_block_chatbot() {
        let result = QueryResult::from_payload(json!({
            "error": null,
            "respuesta": "Aquí tienes recomendaciones específicas para 'lavadora':",
            "Recomendaciones": [{"ID": 3, "ElectroDomestico": "Lavadora", "Sugerencia 1": "Carga completa"}]
        }));
        match result {
            QueryResult::Chatbot(answer) => {
                assert_eq!(
                    answer.respuesta,
                    "Aquí tienes recomendaciones específicas para 'lavadora':"
                );
                assert_eq!(answer.recomendaciones.len(), 1);
                assert_eq!(answer.recomendaciones[0].name(), "Lavadora");
            }
            other => panic!("se esperaba chatbot, llegó {other:?}"),
        }
    }

    #[test]
    fn chatbot_with_no_recommendations_is_still_chatbot() {
        let result = QueryResult::from_payload(json!({
            "respuesta": "No encontré ninguna recomendación en esa categoría.",
            "Recomendaciones": []
        }));
        assert_eq!(
            result,
            QueryResult::Chatbot(ChatbotAnswer {
                respuesta: "No encontré ninguna recomendación en esa categoría.".to_string(),
                recomendaciones: Vec::new(),
            })
        );
    }

    #[test]
    fn chatbot_recommendations_object_counts_as_one_item() {
        let result = QueryResult::from_payload(json!({
            "respuesta": "hola",
            "Recomendaciones": {"ElectroDomestico": "Nevera", "a": "b"}
        }));
        match result {
            QueryResult::Chatbot(answer) => {
                assert_eq!(answer.recomendaciones.len(), 1);
                assert_eq!(answer.recomendaciones[0].name(), "Nevera");
                assert_eq!(answer.recomendaciones[0].display_attributes(), vec![attr("a", "b")]);
            }
            other => panic!("se esperaba chatbot, llegó {other:?}"),
        }
    }

    #[test]
    fn chatbot_recommendations_scalar_yields_no_items() {
        let result = QueryResult::from_payload(json!({
            "respuesta": "hola",
            "Recomendaciones": "x"
        }));
        assert_eq!(
            result,
            QueryResult::Chatbot(ChatbotAnswer {
                respuesta: "hola".to_string(),
                recomendaciones: Vec::new(),
            })
        );
    }

    #[test]
    fn answer_without_recommendations_falls_back_to_single_item() {
        let result = QueryResult::from_payload(json!({"respuesta": "hola"}));
        assert!(matches!(result, QueryResult::Single(_)));
    }

    #[test]
    fn non_empty_array_is_a_list_in_order() {
        let result = QueryResult::from_payload(json!([
            {"ID": 1, "ElectroDomestico": "Nevera"},
            {"ID": 2, "ElectroDomestico": "Horno"}
        ]));
        match result {
            QueryResult::List(items) => {
                let names: Vec<String> = items.iter().map(Item::name).collect();
                assert_eq!(names, vec!["Nevera", "Horno"]);
            }
            other => panic!("se esperaba lista, llegó {other:?}"),
        }
    }

    #[test]
    fn filter_drops_id_name_and_falsy_values_keeping_order() {
        let item = Item::from_value(json!({
            "ID": 7,
            "ElectroDomestico": "Televisor",
            "Sugerencia 2": "Baja el brillo",
            "Sugerencia 1": "Apágalo del todo",
            "Sugerencia 3": "",
            "Sugerencia 4": null,
            "Consumo": 0,
            "Inverter": false,
            "Vatios": 120
        }));
        assert_eq!(item.id(), Some(&json!(7)));
        assert_eq!(
            item.display_attributes(),
            vec![
                attr("Sugerencia 2", "Baja el brillo"),
                attr("Sugerencia 1", "Apágalo del todo"),
                attr("Vatios", "120"),
            ]
        );
    }

    #[test]
    fn missing_name_and_non_objects_are_best_effort() {
        let not_found = Item::from_value(json!({"Detalle": "Recomendación no encontrada"}));
        assert_eq!(not_found.name(), UNNAMED_ITEM);
        assert_eq!(
            not_found.display_attributes(),
            vec![attr("Detalle", "Recomendación no encontrada")]
        );

        let scalar = Item::from_value(json!(42));
        assert_eq!(scalar.name(), UNNAMED_ITEM);
        assert!(scalar.display_attributes().is_empty());
    }

    #[test]
    fn error_result_matches_wire_shape() {
        let parsed: ErrorResult = serde_json::from_value(json!({"error": "X"})).unwrap();
        assert_eq!(parsed, ErrorResult::new("X"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!({"error": "X"}));
    }

    #[test]
    fn http_status_message_is_exact() {
        assert_eq!(ErrorResult::http_status(404).error, "Error HTTP! status: 404");
    }
}
