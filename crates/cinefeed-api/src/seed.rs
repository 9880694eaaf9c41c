//! Bootstrap seeding of the movie catalog.

use cinefeed_core::error::StoreError;
use cinefeed_core::movie::Movie;
use cinefeed_core::repository::MovieRepository;
use tracing::info;

/// Titles inserted at startup, each with a freshly generated id.
pub const SEED_TITLES: [&str; 5] = [
    "Aeon Flux",
    "The Silence of the Lambs",
    "The Lord of the Rings",
    "Enter the Void",
    "Back to the Future",
];

/// Resets the catalog to the five seed titles.
///
/// Runs to completion before the listener binds, so no request can observe a
/// partially seeded catalog. Idempotent: a second run leaves exactly five
/// records again, with fresh ids.
///
/// # Errors
///
/// Returns `StoreError` when the backing store fails; a seeding fault is
/// fatal at startup.
pub async fn seed_catalog(repository: &dyn MovieRepository) -> Result<(), StoreError> {
    repository.delete_all().await?;

    for title in SEED_TITLES {
        let movie = Movie::new(title);
        repository.save(&movie).await?;
        info!(movie_id = %movie.id, title = %movie.title, "seeded movie");
    }

    Ok(())
}
