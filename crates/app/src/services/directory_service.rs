//! Directory service — use-cases for submitting and querying services.

use tokio::sync::Mutex;

use citydir_domain::catalog::MergeOutcome;
use citydir_domain::error::{DirectoryError, NotFoundError};
use citydir_domain::service::Service;
use citydir_domain::submission::Submission;
use citydir_domain::time::now;

use crate::ports::CatalogRepository;

/// Application service for the directory use-cases.
///
/// Every operation performs a fresh load against the repository; nothing
/// is cached between requests. Submissions run a full load-mutate-save
/// cycle serialized through a single writer lock, so concurrent in-process
/// submits cannot drop each other's writes. Queries take no lock and are
/// not guaranteed a consistent snapshot relative to an in-flight write.
pub struct DirectoryService<R> {
    repo: R,
    write_lock: Mutex<()>,
}

impl<R: CatalogRepository> DirectoryService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Fold a validated submission into the catalog and persist it.
    ///
    /// Creates a new service entry under a new name, or extends the
    /// matching entry's area and locality data; `updated_at` advances
    /// either way.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the catalog cannot be loaded or the
    /// replacement document cannot be written; nothing is committed in
    /// that case.
    pub async fn submit(&self, submission: Submission) -> Result<MergeOutcome, DirectoryError> {
        let _guard = self.write_lock.lock().await;

        let name = submission.name.clone();
        let mut catalog = self.repo.load().await?;
        let outcome = catalog.apply(submission, now());
        self.repo.save(catalog).await?;

        tracing::info!(service = %name, outcome = ?outcome, "submission merged");
        Ok(outcome)
    }

    /// Every service with a presence in the given city, insertion-ordered.
    ///
    /// An unknown city yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn services_in_city(&self, city: &str) -> Result<Vec<Service>, DirectoryError> {
        let catalog = self.repo.load().await?;
        Ok(catalog
            .services_in_city(city)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Distinct city display strings, sorted case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn all_cities(&self) -> Result<Vec<String>, DirectoryError> {
        Ok(self.repo.load().await?.cities())
    }

    /// Look up a service by name, matching case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when no service matches, or a
    /// storage error from the repository.
    pub async fn service_by_name(&self, name: &str) -> Result<Service, DirectoryError> {
        let catalog = self.repo.load().await?;
        catalog.find_by_name(name).cloned().ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                key: name.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citydir_domain::catalog::Catalog;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryCatalogRepo {
        catalog: Mutex<Catalog>,
    }

    impl Default for InMemoryCatalogRepo {
        fn default() -> Self {
            Self {
                catalog: Mutex::new(Catalog::default()),
            }
        }
    }

    impl CatalogRepository for InMemoryCatalogRepo {
        fn load(&self) -> impl Future<Output = Result<Catalog, DirectoryError>> + Send {
            let catalog = self.catalog.lock().unwrap().clone();
            async { Ok(catalog) }
        }

        fn save(&self, catalog: Catalog) -> impl Future<Output = Result<(), DirectoryError>> + Send {
            *self.catalog.lock().unwrap() = catalog;
            async { Ok(()) }
        }
    }

    fn make_service() -> DirectoryService<InMemoryCatalogRepo> {
        DirectoryService::new(InMemoryCatalogRepo::default())
    }

    fn submission(name: &str, city: &str, localities: &[&str]) -> Submission {
        Submission::builder()
            .name(name)
            .category("Education")
            .description("Private tutoring")
            .website("https://acme.example")
            .city(city)
            .localities(localities.iter().map(ToString::to_string).collect())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_then_update_on_matching_name_key() {
        let svc = make_service();

        let first = svc
            .submit(submission("Acme Tutors", "Delhi", &["Dwarka"]))
            .await
            .unwrap();
        assert_eq!(first, MergeOutcome::Created);

        let second = svc
            .submit(submission("ACME TUTORS", "Delhi", &["Rohini"]))
            .await
            .unwrap();
        assert_eq!(second, MergeOutcome::Updated);

        let found = svc.service_by_name("acme tutors").await.unwrap();
        assert_eq!(found.areas.len(), 1);
        assert_eq!(found.areas[0].localities, vec!["Dwarka", "Rohini"]);
    }

    #[tokio::test]
    async fn should_keep_content_identical_on_resubmission() {
        let svc = make_service();
        let sub = submission("Acme Tutors", "Delhi", &["Dwarka"]);

        svc.submit(sub.clone()).await.unwrap();
        let before = svc.service_by_name("Acme Tutors").await.unwrap();

        svc.submit(sub).await.unwrap();
        let after = svc.service_by_name("Acme Tutors").await.unwrap();

        assert_eq!(after.areas, before.areas);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn should_return_same_results_for_city_case_variants() {
        let svc = make_service();
        svc.submit(submission("Acme Tutors", "Pune", &[]))
            .await
            .unwrap();

        let exact = svc.services_in_city("Pune").await.unwrap();
        let folded = svc.services_in_city(" PUNE ").await.unwrap();

        assert_eq!(exact.len(), 1);
        assert_eq!(exact.len(), folded.len());
        assert_eq!(exact[0].name, folded[0].name);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_city() {
        let svc = make_service();
        let services = svc.services_in_city("Atlantis").await.unwrap();
        assert!(services.is_empty());
    }

    #[tokio::test]
    async fn should_list_cities_sorted_and_deduplicated() {
        let svc = make_service();
        svc.submit(submission("Acme Tutors", "mumbai", &[]))
            .await
            .unwrap();
        svc.submit(submission("Bright Movers", "Delhi", &[]))
            .await
            .unwrap();
        svc.submit(submission("Crown Cafe", "MUMBAI", &[]))
            .await
            .unwrap();

        let cities = svc.all_cities().await.unwrap();
        assert_eq!(cities, vec!["Delhi", "mumbai"]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_name() {
        let svc = make_service();
        let result = svc.service_by_name("Nonexistent").await;
        assert!(matches!(result, Err(DirectoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_gain_second_area_for_new_city_under_same_name() {
        let svc = make_service();
        svc.submit(submission("Acme Tutors", "Delhi", &["Dwarka"]))
            .await
            .unwrap();
        svc.submit(submission("Acme Tutors", "Mumbai", &[]))
            .await
            .unwrap();

        let found = svc.service_by_name("Acme Tutors").await.unwrap();
        assert_eq!(found.areas.len(), 2);
        assert!(found.areas[1].localities.is_empty());

        let in_mumbai = svc.services_in_city("mumbai").await.unwrap();
        assert_eq!(in_mumbai.len(), 1);
    }
}
