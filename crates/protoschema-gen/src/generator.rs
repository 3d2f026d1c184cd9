//! # Message Schema Assembly
//!
//! Walks a message's fields in declaration order and assembles either an
//! unordered [`Schema`] or an [`OrderedSchema`]. Both forms come from the
//! same assembly pass, so they always describe the same document.
//!
//! ## Rules
//!
//! - A message whose `generate_schema` annotation is explicitly `false`
//!   yields `None`. That is "no schema", not an empty schema.
//! - Hidden fields never reach `properties` or `required`.
//! - A field is required only when its annotation says so.
//! - An explicitly empty title or description is left out of both forms.
//! - Two fields resolving to the same external name: the later one wins.
//!   It replaces the earlier sub-schema in place (the ordered form keeps
//!   the first position) and decides whether the name is required.
//!
//! Nothing here mutates shared state; a [`Generator`] may be used from any
//! number of threads at once.

use std::collections::BTreeMap;

use protoschema_core::{DescriptorSet, FieldDescriptor, MessageDescriptor, SchemaError};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::field::build_field_schema;
use crate::options::{GeneratorOptions, OutputMode};
use crate::ordered::{OrderedProperty, OrderedSchema};
use crate::resolve;
use crate::schema::Schema;
use crate::types::JsonType;

/// Stateless JSON Schema generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

/// Result of one assembly pass, before choosing an output form.
struct Assembly {
    title: String,
    description: Option<String>,
    properties: Vec<OrderedProperty>,
    required: Vec<String>,
}

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the unordered schema for a message.
    ///
    /// Returns `None` when generation is disabled for the message.
    pub fn generate_schema<M: MessageDescriptor>(&self, message: &M) -> Option<Schema> {
        let assembly = assemble(message)?;

        let mut schema = Map::new();
        schema.insert("type".into(), JsonType::Object.as_str().into());
        if !assembly.title.is_empty() {
            schema.insert("title".into(), assembly.title.into());
        }
        if let Some(description) = assembly.description {
            schema.insert("description".into(), description.into());
        }

        let properties: Map<String, Value> = assembly
            .properties
            .into_iter()
            .map(|p| (p.name, Value::Object(p.schema)))
            .collect();
        schema.insert("properties".into(), Value::Object(properties));

        if !assembly.required.is_empty() {
            let required = assembly.required.into_iter().map(Value::String).collect();
            schema.insert("required".into(), Value::Array(required));
        }

        Some(Schema::from_map(schema))
    }

    /// Generate the declaration-ordered schema for a message.
    ///
    /// Returns `None` when generation is disabled for the message.
    pub fn generate_ordered_schema<M: MessageDescriptor>(
        &self,
        message: &M,
    ) -> Option<OrderedSchema> {
        let assembly = assemble(message)?;
        Some(OrderedSchema {
            schema_type: JsonType::Object.as_str().to_string(),
            title: assembly.title,
            description: assembly.description.unwrap_or_default(),
            properties: assembly.properties,
            required: assembly.required,
        })
    }

    /// Generate and render a message schema in the form `options` selects.
    ///
    /// `Ok(None)` means generation is disabled for the message.
    pub fn render<M: MessageDescriptor>(
        &self,
        message: &M,
        options: &GeneratorOptions,
    ) -> Result<Option<String>, SchemaError> {
        match options.mode {
            OutputMode::Ordered => self
                .generate_ordered_schema(message)
                .map(|schema| schema.to_json_string())
                .transpose(),
            OutputMode::Unordered => self
                .generate_schema(message)
                .map(|schema| {
                    if options.pretty {
                        schema.to_json()
                    } else {
                        schema.to_json_compact()
                    }
                })
                .transpose(),
        }
    }

    /// Generate unordered schemas for every message of a set, keyed by
    /// fully-qualified name. Suppressed messages are left out.
    pub fn generate_set(&self, set: &DescriptorSet) -> BTreeMap<String, Schema> {
        set.messages
            .iter()
            .filter_map(|message| {
                self.generate_schema(message)
                    .map(|schema| (message.full_name().to_string(), schema))
            })
            .collect()
    }

    /// Render every message of a set, keyed by fully-qualified name.
    /// Suppressed messages are left out.
    pub fn render_set(
        &self,
        set: &DescriptorSet,
        options: &GeneratorOptions,
    ) -> Result<BTreeMap<String, String>, SchemaError> {
        let mut rendered = BTreeMap::new();
        for message in &set.messages {
            if let Some(text) = self.render(message, options)? {
                rendered.insert(message.full_name().to_string(), text);
            }
        }
        Ok(rendered)
    }
}

fn assemble<M: MessageDescriptor>(message: &M) -> Option<Assembly> {
    if !resolve::should_generate(message.annotations()) {
        debug!(
            message_type = message.full_name(),
            "schema generation disabled; skipping"
        );
        return None;
    }

    let mut assembly = Assembly {
        title: resolve::schema_title(message).to_string(),
        description: resolve::message_description(message.annotations()).map(str::to_string),
        properties: Vec::with_capacity(message.fields().len()),
        required: Vec::new(),
    };

    for field in message.fields() {
        if resolve::is_hidden(field.annotations()) {
            trace!(field = field.name(), "hidden field skipped");
            continue;
        }

        let name = resolve::field_name(field).to_string();
        let schema = build_field_schema(field);
        let required = resolve::is_required(field.annotations());
        trace!(field = field.name(), property = %name, required, "field schema generated");

        assembly.insert(message.full_name(), name, schema, required);
    }

    Some(assembly)
}

impl Assembly {
    fn insert(
        &mut self,
        message_type: &str,
        name: String,
        schema: Map<String, Value>,
        required: bool,
    ) {
        if let Some(existing) = self.properties.iter_mut().find(|p| p.name == name) {
            debug!(message_type, property = %name, "duplicate property name; later field wins");
            existing.schema = schema;
            self.required.retain(|r| *r != name);
        } else {
            self.properties.push(OrderedProperty {
                name: name.clone(),
                schema,
            });
        }

        if required {
            self.required.push(name);
        }
    }
}

/// Generate the unordered schema for a message with a default [`Generator`].
pub fn generate_from_message<M: MessageDescriptor>(message: &M) -> Option<Schema> {
    Generator::new().generate_schema(message)
}

/// Generate the pretty-printed unordered schema text for a message.
///
/// # Errors
///
/// Returns [`SchemaError::GenerationSuppressed`] when generation is disabled
/// for the message, and [`SchemaError::Serialization`] if rendering fails.
pub fn generate_json_from_message<M: MessageDescriptor>(message: &M) -> Result<String, SchemaError> {
    generate_from_message(message)
        .ok_or_else(|| SchemaError::GenerationSuppressed {
            message: message.full_name().to_string(),
        })?
        .to_json()
}

/// A typed message that can describe itself.
///
/// Implemented by message types carrying a descriptor, so callers can ask a
/// value for its schema directly.
pub trait JsonSchemaMessage {
    type Descriptor: MessageDescriptor;

    fn descriptor(&self) -> &Self::Descriptor;

    /// Byte-stable ordered schema text for this message type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::GenerationSuppressed`] when generation is
    /// disabled for the message.
    fn json_schema(&self) -> Result<String, SchemaError> {
        let descriptor = self.descriptor();
        Generator::new()
            .generate_ordered_schema(descriptor)
            .ok_or_else(|| SchemaError::GenerationSuppressed {
                message: descriptor.full_name().to_string(),
            })?
            .to_json_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protoschema_core::{
        EnumDef, FieldDef, FieldKind, FieldOptions, MessageDef, MessageOptions,
    };
    use serde_json::json;

    fn required() -> FieldOptions {
        FieldOptions {
            required: Some(true),
            ..Default::default()
        }
    }

    fn signup() -> MessageDef {
        MessageDef::new("Signup")
            .with_full_name("acme.v1.Signup")
            .with_field(FieldDef::new("email", FieldKind::String).with_options(required()))
            .with_field(FieldDef::new("age", FieldKind::Int32).with_options(FieldOptions {
                minimum: Some(18.0),
                maximum: Some(120.0),
                ..Default::default()
            }))
    }

    #[test]
    fn test_required_email_and_bounded_age() {
        let schema = Generator::new().generate_schema(&signup()).unwrap();
        assert_eq!(
            schema.into_value(),
            json!({
                "type": "object",
                "title": "Signup",
                "properties": {
                    "email": {"type": "string"},
                    "age": {"type": "integer", "minimum": 18, "maximum": 120}
                },
                "required": ["email"]
            })
        );
    }

    #[test]
    fn test_empty_title_omitted_in_both_forms() {
        let message = MessageDef::new("Ping")
            .with_field(FieldDef::new("seq", FieldKind::Uint32))
            .with_options(MessageOptions {
                title: Some(String::new()),
                ..Default::default()
            });
        let generator = Generator::new();

        let schema = generator.generate_schema(&message).unwrap();
        assert_eq!(schema.title(), None);

        let text = generator
            .generate_ordered_schema(&message)
            .unwrap()
            .to_json_string()
            .unwrap();
        assert_eq!(text, r#"{"type":"object","properties":{"seq":{"type":"integer"}}}"#);
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, schema.into_value());
    }

    #[test]
    fn test_ordered_text_for_signup() {
        let text = Generator::new()
            .generate_ordered_schema(&signup())
            .unwrap()
            .to_json_string()
            .unwrap();
        assert!(text.starts_with(r#"{"type":"object","title":"Signup","properties":{"email":{"type":"string"},"age":{"#));
        assert!(text.ends_with(r#"},"required":["email"]}"#));
    }

    #[test]
    fn test_suppressed_message_yields_none() {
        let message = signup().with_options(MessageOptions {
            generate_schema: Some(false),
            ..Default::default()
        });
        let generator = Generator::new();
        assert!(generator.generate_schema(&message).is_none());
        assert!(generator.generate_ordered_schema(&message).is_none());
        assert_eq!(
            generator.render(&message, &GeneratorOptions::default()).unwrap(),
            None
        );
    }

    #[test]
    fn test_explicit_generate_true_still_generates() {
        let message = signup().with_options(MessageOptions {
            generate_schema: Some(true),
            ..Default::default()
        });
        assert!(Generator::new().generate_schema(&message).is_some());
    }

    #[test]
    fn test_json_helper_fails_fast_when_suppressed() {
        let message = signup().with_options(MessageOptions {
            generate_schema: Some(false),
            ..Default::default()
        });
        let err = generate_json_from_message(&message).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::GenerationSuppressed { ref message } if message == "acme.v1.Signup"
        ));
    }

    #[test]
    fn test_hidden_required_field_never_appears() {
        let message = MessageDef::new("Account")
            .with_field(FieldDef::new("id", FieldKind::String).with_options(required()))
            .with_field(
                FieldDef::new("password_hash", FieldKind::Bytes).with_options(FieldOptions {
                    hidden: Some(true),
                    required: Some(true),
                    ..Default::default()
                }),
            );
        let generator = Generator::new();

        let schema = generator.generate_schema(&message).unwrap();
        assert!(schema.property("passwordHash").is_none());
        assert_eq!(schema.required(), vec!["id"]);

        let ordered = generator.generate_ordered_schema(&message).unwrap();
        assert_eq!(ordered.property_names(), vec!["id"]);
        assert_eq!(ordered.required, vec!["id".to_string()]);
    }

    #[test]
    fn test_title_and_description_annotations() {
        let message = MessageDef::new("UserRequest").with_options(MessageOptions {
            title: Some("User Request".into()),
            description: Some("Request to create or update a user".into()),
            ..Default::default()
        });
        let schema = Generator::new().generate_schema(&message).unwrap();
        assert_eq!(schema.title(), Some("User Request"));
        assert_eq!(schema.description(), Some("Request to create or update a user"));
        assert_eq!(schema.properties().map(Map::len), Some(0));
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_rename_annotation_used_as_property_name() {
        let message = MessageDef::new("Profile").with_field(
            FieldDef::new("display_name", FieldKind::String).with_options(FieldOptions {
                json_name: Some("nick".into()),
                required: Some(true),
                ..Default::default()
            }),
        );
        let schema = Generator::new().generate_schema(&message).unwrap();
        assert!(schema.property("nick").is_some());
        assert!(schema.property("displayName").is_none());
        assert_eq!(schema.required(), vec!["nick"]);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let message = MessageDef::new("Order")
            .with_field(FieldDef::new("zulu", FieldKind::Bool))
            .with_field(FieldDef::new("alpha", FieldKind::Double))
            .with_field(FieldDef::enumeration(
                "mike",
                EnumDef::new("Letter", &["Z", "A", "M"]),
            ));
        let ordered = Generator::new().generate_ordered_schema(&message).unwrap();
        assert_eq!(ordered.property_names(), vec!["zulu", "alpha", "mike"]);
        let text = ordered.to_json_string().unwrap();
        assert!(text.starts_with(
            r#"{"type":"object","title":"Order","properties":{"zulu":{"type":"boolean"},"alpha":{"type":"number"},"mike":{"#
        ));
        assert!(text.contains(r#""enum":["Z","A","M"]"#));
    }

    #[test]
    fn test_duplicate_names_last_writer_wins() {
        let message = MessageDef::new("Dup")
            .with_field(FieldDef::new("value", FieldKind::String).with_options(required()))
            .with_field(FieldDef::new("other", FieldKind::Bool))
            .with_field(
                FieldDef::new("value_v2", FieldKind::Int64).with_options(FieldOptions {
                    json_name: Some("value".into()),
                    ..Default::default()
                }),
            );
        let generator = Generator::new();

        let ordered = generator.generate_ordered_schema(&message).unwrap();
        assert_eq!(ordered.property_names(), vec!["value", "other"]);
        assert_eq!(ordered.property("value"), Some(&json_object(json!({"type": "integer"}))));
        assert!(ordered.required.is_empty());

        let schema = generator.generate_schema(&message).unwrap();
        assert_eq!(schema.property("value"), Some(&json!({"type": "integer"})));
        assert!(schema.required().is_empty());
    }

    #[test]
    fn test_duplicate_required_listed_once() {
        let message = MessageDef::new("Dup")
            .with_field(FieldDef::new("a", FieldKind::String).with_options(required()))
            .with_field(
                FieldDef::new("b", FieldKind::String).with_options(FieldOptions {
                    json_name: Some("a".into()),
                    required: Some(true),
                    ..Default::default()
                }),
            );
        let schema = Generator::new().generate_schema(&message).unwrap();
        assert_eq!(schema.required(), vec!["a"]);
    }

    #[test]
    fn test_render_modes() {
        let generator = Generator::new();
        let message = signup();

        let ordered = generator
            .render(&message, &GeneratorOptions::ordered())
            .unwrap()
            .unwrap();
        let pretty = generator
            .render(&message, &GeneratorOptions::unordered(true))
            .unwrap()
            .unwrap();
        let compact = generator
            .render(&message, &GeneratorOptions::unordered(false))
            .unwrap()
            .unwrap();

        assert!(!ordered.contains('\n'));
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let a: Value = serde_json::from_str(&ordered).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        let c: Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_generate_set_skips_suppressed() {
        let set = DescriptorSet {
            package: Some("acme.v1".into()),
            messages: vec![
                signup(),
                MessageDef::new("Internal")
                    .with_full_name("acme.v1.Internal")
                    .with_options(MessageOptions {
                        generate_schema: Some(false),
                        ..Default::default()
                    }),
            ],
        };
        let generator = Generator::new();

        let schemas = generator.generate_set(&set);
        assert_eq!(schemas.keys().collect::<Vec<_>>(), vec!["acme.v1.Signup"]);

        let rendered = generator.render_set(&set, &GeneratorOptions::ordered()).unwrap();
        assert_eq!(rendered.len(), 1);
        assert!(rendered["acme.v1.Signup"].starts_with(r#"{"type":"object""#));
    }

    struct Signup {
        descriptor: MessageDef,
    }

    impl JsonSchemaMessage for Signup {
        type Descriptor = MessageDef;

        fn descriptor(&self) -> &MessageDef {
            &self.descriptor
        }
    }

    #[test]
    fn test_json_schema_message_trait() {
        let msg = Signup {
            descriptor: signup(),
        };
        let text = msg.json_schema().unwrap();
        assert_eq!(
            text,
            Generator::new()
                .generate_ordered_schema(&signup())
                .unwrap()
                .to_json_string()
                .unwrap()
        );
    }

    fn json_object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}
