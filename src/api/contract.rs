//! The shared route contract: one static table of every operation the
//! service exposes (method, path template, input shape, response shape
//! per status code). The router builds its paths from this table and
//! the integration tests validate wire bodies against it, so request
//! construction and response interpretation cannot drift.

use crate::error::AppError;
use axum::http::Method;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Str,
    Bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub required: bool,
}

const fn req(name: &'static str, kind: Kind) -> Field {
    Field { name, kind, required: true }
}

const fn opt(name: &'static str, kind: Kind) -> Field {
    Field { name, kind, required: false }
}

/// Structural description of a JSON body.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Object(&'static [Field]),
    List(&'static Shape),
}

impl Shape {
    /// Checks field presence and JSON types. Optional fields may be
    /// absent or null; extra fields are tolerated.
    pub fn validate(&self, value: &Value) -> Result<(), AppError> {
        match self {
            Shape::Object(fields) => {
                let obj = value
                    .as_object()
                    .ok_or_else(|| AppError::Validation("expected a JSON object".into()))?;
                for field in *fields {
                    match obj.get(field.name) {
                        Some(v) if !v.is_null() => {
                            let ok = match field.kind {
                                Kind::Int => v.is_i64() || v.is_u64(),
                                Kind::Str => v.is_string(),
                                Kind::Bool => v.is_boolean(),
                            };
                            if !ok {
                                return Err(AppError::Validation(format!(
                                    "field '{}' has the wrong type",
                                    field.name
                                )));
                            }
                        }
                        _ if field.required => {
                            return Err(AppError::Validation(format!(
                                "missing required field '{}'",
                                field.name
                            )));
                        }
                        _ => {}
                    }
                }
                Ok(())
            }
            Shape::List(elem) => {
                let items = value
                    .as_array()
                    .ok_or_else(|| AppError::Validation("expected a JSON array".into()))?;
                for item in items {
                    elem.validate(item)?;
                }
                Ok(())
            }
        }
    }
}

// Entity shapes as they appear on the wire (camelCase; the password
// hash never serializes).
pub const USER: Shape = Shape::Object(&[
    req("id", Kind::Int),
    req("username", Kind::Str),
    opt("email", Kind::Str),
    opt("organization", Kind::Str),
]);

pub const PLANT: Shape = Shape::Object(&[
    req("id", Kind::Int),
    req("name", Kind::Str),
    req("species", Kind::Str),
    req("healthStatus", Kind::Str),
    opt("imageUrl", Kind::Str),
]);

pub const TREND: Shape = Shape::Object(&[
    req("id", Kind::Int),
    req("title", Kind::Str),
    req("description", Kind::Str),
    opt("imageUrl", Kind::Str),
    opt("sourceUrl", Kind::Str),
]);

pub const TASK: Shape = Shape::Object(&[
    req("id", Kind::Int),
    req("title", Kind::Str),
    req("isCompleted", Kind::Bool),
    opt("dueDate", Kind::Str),
]);

pub const MESSAGE: Shape = Shape::Object(&[
    req("id", Kind::Int),
    req("content", Kind::Str),
    req("role", Kind::Str),
    req("timestamp", Kind::Str),
]);

pub const ERROR_BODY: Shape = Shape::Object(&[req("error", Kind::Str)]);

pub const PLANT_LIST: Shape = Shape::List(&PLANT);
pub const TREND_LIST: Shape = Shape::List(&TREND);
pub const TASK_LIST: Shape = Shape::List(&TASK);
pub const MESSAGE_LIST: Shape = Shape::List(&MESSAGE);

// Input shapes.
pub const LOGIN_INPUT: Shape = Shape::Object(&[
    req("username", Kind::Str),
    req("password", Kind::Str),
]);

pub const UPDATE_PROFILE_INPUT: Shape = Shape::Object(&[
    opt("username", Kind::Str),
    opt("password", Kind::Str),
    opt("email", Kind::Str),
    opt("organization", Kind::Str),
]);

pub const TOGGLE_TASK_INPUT: Shape = Shape::Object(&[req("isCompleted", Kind::Bool)]);

/// Query parameters for the trends listing; everything is optional.
pub const TREND_QUERY_INPUT: Shape = Shape::Object(&[opt("search", Kind::Str)]);

pub const CHAT_INPUT: Shape = Shape::Object(&[req("content", Kind::Str)]);

pub struct Route {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub input: Option<&'static Shape>,
    /// Status code to expected body shape.
    pub responses: &'static [(u16, &'static Shape)],
}

pub const LOGIN: Route = Route {
    name: "login",
    method: Method::POST,
    path: "/api/login",
    input: Some(&LOGIN_INPUT),
    responses: &[(200, &USER), (401, &ERROR_BODY)],
};

pub const GET_USER: Route = Route {
    name: "getUser",
    method: Method::GET,
    path: "/api/user/{id}",
    input: None,
    responses: &[(200, &USER), (404, &ERROR_BODY)],
};

pub const UPDATE_PROFILE: Route = Route {
    name: "updateProfile",
    method: Method::PUT,
    path: "/api/user/{id}",
    input: Some(&UPDATE_PROFILE_INPUT),
    responses: &[(200, &USER), (404, &ERROR_BODY)],
};

pub const LIST_PLANTS: Route = Route {
    name: "listPlants",
    method: Method::GET,
    path: "/api/plants",
    input: None,
    responses: &[(200, &PLANT_LIST)],
};

pub const GET_PLANT: Route = Route {
    name: "getPlant",
    method: Method::GET,
    path: "/api/plants/{id}",
    input: None,
    responses: &[(200, &PLANT), (404, &ERROR_BODY)],
};

pub const LIST_TRENDS: Route = Route {
    name: "listTrends",
    method: Method::GET,
    path: "/api/trends",
    input: Some(&TREND_QUERY_INPUT),
    responses: &[(200, &TREND_LIST)],
};

pub const LIST_TASKS: Route = Route {
    name: "listTasks",
    method: Method::GET,
    path: "/api/tasks",
    input: None,
    responses: &[(200, &TASK_LIST)],
};

pub const TOGGLE_TASK: Route = Route {
    name: "toggleTask",
    method: Method::PATCH,
    path: "/api/tasks/{id}/toggle",
    input: Some(&TOGGLE_TASK_INPUT),
    responses: &[(200, &TASK), (404, &ERROR_BODY)],
};

pub const SEND_CHAT_MESSAGE: Route = Route {
    name: "sendChatMessage",
    method: Method::POST,
    path: "/api/chat",
    input: Some(&CHAT_INPUT),
    responses: &[(200, &MESSAGE)],
};

pub const GET_CHAT_HISTORY: Route = Route {
    name: "getChatHistory",
    method: Method::GET,
    path: "/api/chat/history",
    input: None,
    responses: &[(200, &MESSAGE_LIST)],
};

pub const ROUTES: &[&Route] = &[
    &LOGIN,
    &GET_USER,
    &UPDATE_PROFILE,
    &LIST_PLANTS,
    &GET_PLANT,
    &LIST_TRENDS,
    &LIST_TASKS,
    &TOGGLE_TASK,
    &SEND_CHAT_MESSAGE,
    &GET_CHAT_HISTORY,
];

impl Route {
    pub fn expected_shape(&self, status: u16) -> Option<&'static Shape> {
        self.responses
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, shape)| *shape)
    }
}

/// Substitutes `{name}` placeholders in a path template. Pure; leaves
/// placeholders with no matching parameter untouched.
pub fn build_path(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |path, (name, value)| {
        path.replace(&format!("{{{name}}}"), value)
    })
}
