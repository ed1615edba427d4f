use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_reviews::{config, ReviewStore};

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "course_reviews=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_database_path();

  // Schema or seed failures leave nothing usable; abort startup
  let store = match ReviewStore::open(&db_path) {
    Ok(store) => store,
    Err(e) => {
      tracing::error!("Failed to initialize review store: {}", e);
      return ExitCode::FAILURE;
    }
  };

  match store.search_courses(None, None, None) {
    Ok(catalog) => {
      tracing::info!("Catalog ready with {} courses", catalog.len());
      for course in &catalog {
        if course.has_reviews() {
          tracing::debug!("{} ({:.1} from {} reviews)", course, course.average_rating, course.review_count);
        } else {
          tracing::debug!("{}", course);
        }
      }
    }
    Err(e) => {
      tracing::error!("Failed to read catalog: {}", e);
      return ExitCode::FAILURE;
    }
  }

  if let Err(e) = store.close() {
    tracing::warn!("Failed to close database: {}", e);
  }
  ExitCode::SUCCESS
}
