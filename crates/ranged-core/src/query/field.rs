use std::fmt;

///
/// Field
///
/// A named, directly-typed accessor into an entity.
///

pub struct Field<E, T> {
    name: &'static str,
    read: fn(&E) -> T,
}

impl<E, T> Field<E, T> {
    #[must_use]
    pub const fn new(name: &'static str, read: fn(&E) -> T) -> Self {
        Self { name, read }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn read(&self, entity: &E) -> T {
        (self.read)(entity)
    }
}

///
/// OptionalField
///
/// A named accessor whose value may be absent.
///

pub struct OptionalField<E, T> {
    name: &'static str,
    read: fn(&E) -> Option<T>,
}

impl<E, T> OptionalField<E, T> {
    #[must_use]
    pub const fn new(name: &'static str, read: fn(&E) -> Option<T>) -> Self {
        Self { name, read }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn read(&self, entity: &E) -> Option<T> {
        (self.read)(entity)
    }
}

// Manual impls: accessors are copyable whatever `E` and `T` are.

impl<E, T> Clone for Field<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Field<E, T> {}

impl<E, T> Clone for OptionalField<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for OptionalField<E, T> {}

impl<E, T> fmt::Debug for Field<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

impl<E, T> fmt::Debug for OptionalField<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalField").field(&self.name).finish()
    }
}
