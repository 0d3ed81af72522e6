#![deny(rust_2018_idioms)]

//! Generate declarative HTML form markup trees from JSON-Schema-like
//! field descriptions. The output is a renderer-agnostic
//! [`MarkupNode`] tree; DOM insertion, event wiring, and validation
//! execution belong to the consuming renderer.

pub mod form;
pub mod markup;
pub mod schema;


pub use form::{FormGenerator, input, input_type, label};
pub use markup::{MarkupChild, MarkupNode, Namespace, Tag};
pub use schema::{FieldKind, FieldSchema, FormDocument};

pub mod prelude {
    pub use super::{
        FieldKind, FieldSchema, FormDocument, FormGenerator, MarkupChild, MarkupNode, Namespace,
        Tag,
    };
}
