//! Generates the closed object model shared by the 2D and 3D modules.
//!
//! The invoking module must have in scope every listed primitive type, a
//! `Primitive` trait, `Transformable`, `Transformation`, `Result` and
//! `std::fmt`.

/// Expands to `Object`, `ObjectKind` and the per-variant glue:
/// `From<T> for Object`, `Primitive for T`, `Transformable` and `Display`.
macro_rules! object_model {
    ($dimension:literal: $($(#[$doc:meta])* $variant:ident),+ $(,)?) => {
        #[doc = concat!("Any ", $dimension, " primitive.")]
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Object {
            $($(#[$doc])* $variant($variant),)+
        }

        /// Field-less tag of an [`Object`] variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum ObjectKind {
            $($(#[$doc])* $variant,)+
        }

        impl ObjectKind {
            /// Type name, as used in error messages.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl Object {
            /// Tag of the wrapped primitive.
            pub fn kind(&self) -> ObjectKind {
                match self {
                    $(Self::$variant(_) => ObjectKind::$variant,)+
                }
            }

            /// Returns true if the wrapped primitive is defined.
            pub fn is_defined(&self) -> bool {
                match self {
                    $(Self::$variant(inner) => inner.is_defined(),)+
                }
            }
        }

        $(
            impl From<$variant> for Object {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }

            impl Primitive for $variant {
                const KIND: ObjectKind = ObjectKind::$variant;

                fn from_object(object: &Object) -> Option<&Self> {
                    match object {
                        Object::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_object_owned(object: Object) -> std::result::Result<Self, Object> {
                    match object {
                        Object::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )+

        impl Transformable for Object {
            fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
                match self {
                    $(Self::$variant(inner) => inner.apply_transformation_mut(transformation),)+
                }
            }
        }

        impl fmt::Display for Object {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(inner) => write!(f, "{inner}"),)+
                }
            }
        }

        impl fmt::Display for ObjectKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Object {
            /// Returns true if the wrapped primitive is a `T`.
            pub fn is<T: Primitive>(&self) -> bool {
                self.kind() == T::KIND
            }

            /// Borrows the wrapped `T`, failing with a type mismatch otherwise.
            pub fn downcast<T: Primitive>(&self) -> Result<&T> {
                T::from_object(self)
                    .ok_or_else(|| GeometryError::type_mismatch(T::KIND.name(), self.kind().name()))
            }

            /// Unwraps into a `T`, failing with a type mismatch otherwise.
            pub fn into_inner<T: Primitive>(self) -> Result<T> {
                T::from_object_owned(self)
                    .map_err(|object| GeometryError::type_mismatch(T::KIND.name(), object.kind().name()))
            }
        }
    };
}
