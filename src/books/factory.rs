use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new("books"))
        }
    }
}
