//! Repository abstractions.
make_re_export!(mutable_repository, read_only_repository);

/// Repository backed by a database, readable and writable.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send + Sync + crate::model::AggregateRoot,
{
}
