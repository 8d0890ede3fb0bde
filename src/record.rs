//! Record values for document stores
//!
//! A [`Record`] is plain structured data with a designated unique id and, optionally,
//! named derived keys ([`Index`]) a store can look it up by. Records refer to each
//! other through typed [`Key`]s. The store itself lives outside this crate; with the
//! `json` feature, [`Document`] packages a record the way a store client consumes
//! it: key, serialized body and index entries.
//!
//! # Examples
//!
//! ```
//! use quiver::record::{Address, Key, Record, User};
//!
//! let berlin = Address::new("uid-berlin", "Berlin");
//! let user = User::new("uid-ada", "Ada", "Lovelace", Key::of(&berlin));
//!
//! assert_eq!(Key::of(&berlin).to_string(), "Key(Address/uid-berlin)");
//! assert_eq!(user.name_index(), vec!["Lovelace".to_string(), "Ada".to_string()]);
//! assert_eq!(user.indexes()[0].name, "name");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Structured data a document store can persist and index.
pub trait Record {
    /// Collection name, used to namespace keys.
    const KIND: &'static str;

    /// The unique identifier of this record within its kind.
    fn id(&self) -> &str;

    /// Named derived keys for secondary lookup.
    fn indexes(&self) -> Vec<Index> {
        Vec::new()
    }
}

/// A named derived key, e.g. `name = [last_name, first_name]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Index {
    /// Index name
    pub name: &'static str,
    /// Index values, in the order they are compared
    pub values: Vec<String>,
}

impl Index {
    /// Create an index entry.
    pub fn new(name: &'static str, values: Vec<String>) -> Self {
        Index { name, values }
    }
}

/// A typed reference to a record of kind `R`.
///
/// Equality and hashing look only at the id.
pub struct Key<R> {
    id: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Key<R> {
    /// Reference the record with this id.
    pub fn new(id: impl Into<String>) -> Self {
        Key {
            id: id.into(),
            _record: PhantomData,
        }
    }

    /// The referenced id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<R: Record> Key<R> {
    /// The key of an existing record.
    pub fn of(record: &R) -> Self {
        Key::new(record.id())
    }
}

impl<R> Clone for Key<R> {
    fn clone(&self) -> Self {
        Key::new(self.id.clone())
    }
}

impl<R> PartialEq for Key<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<R> Eq for Key<R> {}

impl<R> Hash for Key<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<R> fmt::Debug for Key<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.id).finish()
    }
}

impl<R: Record> fmt::Display for Key<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({}/{})", R::KIND, self.id)
    }
}

#[cfg(feature = "serde")]
impl<R> serde::Serialize for Key<R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for Key<R> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Key::new)
    }
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Unique id
    pub uid: String,
    /// City name
    pub city: String,
}

impl Address {
    /// Create an address.
    pub fn new(uid: impl Into<String>, city: impl Into<String>) -> Self {
        Address {
            uid: uid.into(),
            city: city.into(),
        }
    }
}

impl Record for Address {
    const KIND: &'static str = "Address";

    fn id(&self) -> &str {
        &self.uid
    }
}

/// A user living at an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique id
    pub uid: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Where the user lives
    pub address: Key<Address>,
}

impl User {
    /// Create a user.
    pub fn new(
        uid: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: Key<Address>,
    ) -> Self {
        User {
            uid: uid.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address,
        }
    }

    /// Values of the `name` index: last name, then first name.
    pub fn name_index(&self) -> Vec<String> {
        vec![self.last_name.clone(), self.first_name.clone()]
    }
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.uid
    }

    fn indexes(&self) -> Vec<Index> {
        vec![Index::new("name", self.name_index())]
    }
}

#[cfg(feature = "json")]
pub use document::Document;

#[cfg(feature = "json")]
mod document {
    use std::borrow::Cow;

    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use super::{Index, Key, Record};
    use crate::{convert, Either, Fault};

    /// A record ready to hand to a store: its key, JSON body and index entries.
    ///
    /// ```
    /// use quiver::record::{Address, Document};
    ///
    /// let doc = Document::encode(&Address::new("uid-paris", "Paris"))
    ///     .get_or_handle(|fault| panic!("{fault}"));
    /// assert_eq!(doc.key().to_string(), "Key(Address/uid-paris)");
    /// assert_eq!(doc.json(), r#"{"uid":"uid-paris","city":"Paris"}"#);
    /// ```
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Document<R> {
        key: Key<R>,
        body: Vec<u8>,
        indexes: Vec<Index>,
    }

    impl<R: Record + Serialize> Document<R> {
        /// Serialize `record`. Failures become a [`Fault`] naming the key.
        pub fn encode(record: &R) -> Either<Fault, Self> {
            let key = Key::of(record);
            let context = format!("encoding {key}");
            convert::attempt(|| serde_json::to_vec(record))
                .map_left(|fault| fault.context(context))
                .map(|body| {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(key = %key, bytes = body.len(), "encoded document");
                    Document {
                        key,
                        body,
                        indexes: record.indexes(),
                    }
                })
        }
    }

    impl<R: Record + DeserializeOwned> Document<R> {
        /// Deserialize the body back into a record.
        pub fn decode(&self) -> Either<Fault, R> {
            convert::attempt(|| serde_json::from_slice(&self.body))
                .map_left(|fault| fault.context(format!("decoding {}", self.key)))
        }
    }

    impl<R> Document<R> {
        /// Build a document from raw parts, e.g. bytes read back from a store.
        pub fn from_parts(key: Key<R>, body: Vec<u8>, indexes: Vec<Index>) -> Self {
            Document { key, body, indexes }
        }

        /// The record's key.
        pub fn key(&self) -> &Key<R> {
            &self.key
        }

        /// Serialized body.
        pub fn body(&self) -> &[u8] {
            &self.body
        }

        /// Body as text.
        pub fn json(&self) -> Cow<'_, str> {
            String::from_utf8_lossy(&self.body)
        }

        /// Index entries captured at encode time.
        pub fn indexes(&self) -> &[Index] {
            &self.indexes
        }
    }
}
