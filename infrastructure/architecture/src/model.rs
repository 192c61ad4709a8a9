use uuid::Uuid;

/// Marks a type persisted and loaded as a whole through a repository.
pub trait AggregateRoot {
    fn id(&self) -> Uuid;
}
