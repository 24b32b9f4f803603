use crate::domain::model::StorageValue;
use crate::domain::ports::{FromStorage, Scanner, ToStorage, Valuer};
use crate::utils::error::Result;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value of `T` that may be absent.
///
/// Absence maps to SQL NULL on the storage boundary, to `null` on the JSON
/// boundary and to `None` on the domain side. While absent, `value` holds
/// `T::default()` and is never handed out as if it were meaningful.
#[derive(Clone, Copy, Default)]
pub struct Nullable<T> {
    value: T,
    present: bool,
}

impl<T: Default> Nullable<T> {
    pub fn null() -> Self {
        Self {
            value: T::default(),
            present: false,
        }
    }
}

impl<T> Nullable<T> {
    /// A present value. A present zero value is distinct from absence.
    pub fn of(value: T) -> Self {
        Self {
            value,
            present: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.present
    }

    /// Returns the payload and the presence flag. When the flag is `false` the
    /// payload is `T::default()` and carries no meaning.
    pub fn extract(self) -> (T, bool) {
        (self.value, self.present)
    }

    pub fn extract_or(self, fallback: T) -> T {
        if self.present {
            self.value
        } else {
            fallback
        }
    }

    pub fn get(&self) -> Option<&T> {
        if self.present {
            Some(&self.value)
        } else {
            None
        }
    }

    pub fn into_option(self) -> Option<T> {
        if self.present {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn to_option(&self) -> Option<T>
    where
        T: Clone,
    {
        self.get().cloned()
    }

    pub fn map<U, F>(self, f: F) -> Nullable<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        match self.into_option() {
            Some(value) => Nullable::of(f(value)),
            None => Nullable::null(),
        }
    }
}

impl<T: FromStorage + Default> Nullable<T> {
    /// Populates the container from a driver value. `StorageValue::Null` makes it
    /// absent; anything else goes through `T`'s conversion rules. On error the
    /// container keeps its previous state.
    pub fn scan(&mut self, src: impl Into<StorageValue>) -> Result<()> {
        let src = src.into();
        let kind = src.kind();
        let next = if src.is_null() {
            Nullable::null()
        } else {
            Nullable::of(T::from_storage(src)?)
        };
        tracing::trace!(
            source_type = kind,
            target_type = std::any::type_name::<T>(),
            present = next.present,
            "scanned storage value"
        );
        *self = next;
        Ok(())
    }
}

impl<T: ToStorage> Nullable<T> {
    /// The driver representation: `StorageValue::Null` when absent.
    pub fn value(&self) -> Result<StorageValue> {
        Ok(self
            .get()
            .map_or(StorageValue::Null, ToStorage::to_storage))
    }
}

impl<T: FromStorage + Default> Scanner for Nullable<T> {
    fn scan(&mut self, src: StorageValue) -> Result<()> {
        Nullable::scan(self, src)
    }
}

impl<T: ToStorage> Valuer for Nullable<T> {
    fn value(&self) -> Result<StorageValue> {
        Nullable::value(self)
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Nullable").field(value).finish(),
            None => f.write_str("Null"),
        }
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Nullable::null, Nullable::of)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
