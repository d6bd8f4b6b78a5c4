//! Loyalty points and ranking derivation.
//!
//! Points are never modeled locally; every figure is derived ad hoc from
//! the remote order history, one request per establishment, and sorted on
//! the client. Nothing is cached, every call recomputes.

use log::warn;
use shared::{PointsEntry, RankingEntry};
use std::sync::Arc;

use crate::api::StorefrontApi;
use crate::domain::catalog_service::CatalogService;
use crate::domain::session_service::SessionService;

#[derive(Clone)]
pub struct PointsService {
    api: Arc<dyn StorefrontApi>,
    catalog: CatalogService,
    session: SessionService,
}

impl PointsService {
    pub fn new(api: Arc<dyn StorefrontApi>, catalog: CatalogService, session: SessionService) -> Self {
        Self { api, catalog, session }
    }

    /// Points the current user has earned at one establishment. Degrades
    /// to 0 when there is no logged-in user or the request fails.
    pub async fn store_points(&self, establishment_id: &str) -> u32 {
        let Some(client_id) = self.session.current_user_id() else {
            return 0;
        };
        self.fetch_points(&client_id, establishment_id).await
    }

    /// Per-establishment points for the current user, sorted descending
    /// by points. The establishment list itself goes through the catalog
    /// fallback, so a dead backend still produces a (zeroed) ranking.
    /// Empty when no user is logged in.
    pub async fn establishment_ranking(&self) -> Vec<PointsEntry> {
        let Some(client_id) = self.session.current_user_id() else {
            return Vec::new();
        };

        let establishments = self.catalog.establishments(None, None).await.data;
        let mut entries = Vec::with_capacity(establishments.len());
        for establishment in establishments {
            let points = self.fetch_points(&client_id, &establishment.id).await;
            entries.push(PointsEntry {
                establishment_id: establishment.id,
                establishment_name: establishment.name,
                points,
            });
        }
        entries.sort_by(|a, b| b.points.cmp(&a.points));
        entries
    }

    /// The establishment where the current user holds the most points.
    pub async fn favorite_store(&self) -> Option<PointsEntry> {
        self.establishment_ranking().await.into_iter().next()
    }

    /// Client leaderboard of one establishment. A failed request shows an
    /// empty leaderboard rather than an error.
    pub async fn establishment_leaderboard(&self, establishment_id: &str) -> Vec<RankingEntry> {
        match self.api.establishment_ranking(establishment_id).await {
            Ok(ranking) => ranking,
            Err(e) => {
                warn!("Leaderboard fetch for '{}' failed: {}", establishment_id, e);
                Vec::new()
            }
        }
    }

    async fn fetch_points(&self, client_id: &str, establishment_id: &str) -> u32 {
        match self.api.points_from_orders(client_id, establishment_id).await {
            Ok(store_points) => store_points.points,
            Err(e) => {
                warn!("Points fetch for '{}' failed: {}", establishment_id, e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::StubApi;
    use crate::storage::{KvConnection, SessionRepository};
    use shared::{Establishment, UserProfile};

    fn establishment(id: &str, name: &str) -> Establishment {
        Establishment {
            id: id.to_string(),
            name: name.to_string(),
            category: "Restaurante".to_string(),
            description: None,
            address: "Rua A, 1".to_string(),
            logo_url: None,
            cover_url: None,
            rating: None,
            distance: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn create_test_service(api: StubApi, logged_in: bool) -> (tempfile::TempDir, PointsService) {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = Arc::new(KvConnection::new(temp_dir.path()).unwrap());
        let session = SessionService::new(Arc::new(SessionRepository::new(connection)));
        if logged_in {
            let profile = UserProfile {
                id: "client-1".to_string(),
                email: "eric@example.com".to_string(),
                name: None,
            };
            session.set_session(&profile, "jwt-token").unwrap();
        }
        let api: Arc<dyn StorefrontApi> = Arc::new(api);
        let catalog = CatalogService::new(api.clone());
        (temp_dir, PointsService::new(api, catalog, session))
    }

    fn stub_with_points() -> StubApi {
        let mut api = StubApi::default();
        api.establishments = vec![
            establishment("diade", "DiaDe"),
            establishment("ampm", "AM/PM"),
            establishment("versa", "Versa"),
        ];
        api.points.insert("diade".to_string(), 450);
        api.points.insert("ampm".to_string(), 1250);
        api
    }

    #[tokio::test]
    async fn test_store_points_without_user_is_zero() {
        let (_guard, service) = create_test_service(stub_with_points(), false);
        assert_eq!(service.store_points("ampm").await, 0);
    }

    #[tokio::test]
    async fn test_store_points_for_logged_in_user() {
        let (_guard, service) = create_test_service(stub_with_points(), true);
        assert_eq!(service.store_points("ampm").await, 1250);
        assert_eq!(service.store_points("versa").await, 0);
    }

    #[tokio::test]
    async fn test_ranking_sorted_descending() {
        let (_guard, service) = create_test_service(stub_with_points(), true);

        let ranking = service.establishment_ranking().await;
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].establishment_id, "ampm");
        assert_eq!(ranking[0].points, 1250);
        assert_eq!(ranking[1].establishment_id, "diade");
        assert_eq!(ranking[2].points, 0);
    }

    #[tokio::test]
    async fn test_ranking_empty_without_user() {
        let (_guard, service) = create_test_service(stub_with_points(), false);
        assert!(service.establishment_ranking().await.is_empty());
        assert_eq!(service.favorite_store().await, None);
    }

    #[tokio::test]
    async fn test_favorite_store_is_top_of_ranking() {
        let (_guard, service) = create_test_service(stub_with_points(), true);

        let favorite = service.favorite_store().await.unwrap();
        assert_eq!(favorite.establishment_name, "AM/PM");
        assert_eq!(favorite.points, 1250);
    }

    #[tokio::test]
    async fn test_offline_backend_yields_zeroed_fallback_ranking() {
        let (_guard, service) = create_test_service(StubApi::offline(), true);

        let ranking = service.establishment_ranking().await;
        // Fallback establishments, every points request failed
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|entry| entry.points == 0));
    }

    #[tokio::test]
    async fn test_leaderboard_failure_degrades_to_empty() {
        let (_guard, service) = create_test_service(StubApi::offline(), true);
        assert!(service.establishment_leaderboard("diade").await.is_empty());
    }
}
