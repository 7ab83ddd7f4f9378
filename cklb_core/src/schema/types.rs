//! Schema description types interpreted by the caster

/// Declarative schema for one JSON value
///
/// `Array` is strict (the value must already be a JSON array); `Seq` is
/// the explicit one-or-many sequence used where the source XML-derived
/// format emits a bare object for singleton collections. Every consumer
/// of an ambiguous field goes through `Seq`, so the ambiguity never
/// leaks past the parse boundary.
#[derive(Debug, Clone)]
pub enum Schema {
    Bool,
    Number,
    String,
    Null,
    /// One of a fixed set of string literals
    Enum(&'static [&'static str]),
    /// JSON array of the inner schema
    Array(Box<Schema>),
    /// One-or-many: a bare value is coerced to a one-element sequence
    Seq(Box<Schema>),
    /// First matching member wins
    Union(Vec<Schema>),
    Object(ObjectSchema),
    /// Named reference into the registry
    Ref(&'static str),
}

impl Schema {
    pub fn array(inner: Schema) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn seq(inner: Schema) -> Self {
        Self::Seq(Box::new(inner))
    }

    pub fn union(members: Vec<Schema>) -> Self {
        Self::Union(members)
    }

    /// Nullable shorthand: the value or JSON null
    pub fn nullable(inner: Schema) -> Self {
        Self::Union(vec![inner, Schema::Null])
    }

    pub fn object(props: Vec<Prop>, additional: AdditionalPolicy) -> Self {
        Self::Object(ObjectSchema { props, additional })
    }
}

/// One property of an object schema, carrying both key spellings
#[derive(Debug, Clone)]
pub struct Prop {
    /// Key as it appears in the source document (`+@id`, `+content`, ...)
    pub wire: &'static str,
    /// Key used by the internal model
    pub internal: &'static str,
    pub schema: Schema,
    pub optional: bool,
}

impl Prop {
    /// Property whose wire and internal spellings already agree
    pub fn plain(key: &'static str, schema: Schema) -> Self {
        Self {
            wire: key,
            internal: key,
            schema,
            optional: false,
        }
    }

    /// Property renamed between wire and internal conventions
    pub fn renamed(wire: &'static str, internal: &'static str, schema: Schema) -> Self {
        Self {
            wire,
            internal,
            schema,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Handling of object properties not declared in the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionalPolicy {
    /// Undeclared properties are an error
    Deny,
    /// Undeclared properties are dropped (wire noise, e.g. xmlns attributes)
    Ignore,
    /// Undeclared properties pass through unchanged
    Keep,
}

/// Object schema: declared properties plus an additional-property policy
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub props: Vec<Prop>,
    pub additional: AdditionalPolicy,
}
