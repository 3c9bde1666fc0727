use crate::domain::models::plant::{NewPlant, Plant};
use crate::domain::ports::PlantRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub struct MemoryPlantRepo {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    plants: HashMap<i64, Plant>,
}

impl MemoryPlantRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                plants: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner.lock().map_err(|_| AppError::Internal)
    }
}

impl Default for MemoryPlantRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantRepository for MemoryPlantRepo {
    async fn create(&self, plant: NewPlant) -> Result<Plant, AppError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let plant = Plant {
            id,
            name: plant.name,
            species: plant.species,
            health_status: plant.health_status,
            image_url: plant.image_url,
        };
        inner.plants.insert(id, plant.clone());
        Ok(plant)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Plant>, AppError> {
        Ok(self.lock()?.plants.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Plant>, AppError> {
        let mut plants: Vec<Plant> = self.lock()?.plants.values().cloned().collect();
        // Insertion order; ids are assigned monotonically.
        plants.sort_by_key(|p| p.id);
        Ok(plants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn monstera_scenario() {
        let repo = MemoryPlantRepo::new();
        repo.create(NewPlant {
            name: "Monstera".to_string(),
            species: "Monstera Deliciosa".to_string(),
            health_status: "Good".to_string(),
            image_url: None,
        })
        .await
        .unwrap();

        let plant = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(plant.id, 1);
        assert_eq!(plant.name, "Monstera");
        assert_eq!(plant.species, "Monstera Deliciosa");
        assert_eq!(plant.health_status, "Good");
        assert_eq!(plant.image_url, None);
    }

    #[tokio::test]
    async fn list_returns_plants_in_insertion_order() {
        let repo = MemoryPlantRepo::new();
        for name in ["Monstera", "Snake Plant", "Fiddle Leaf"] {
            repo.create(NewPlant {
                name: name.to_string(),
                species: "s".to_string(),
                health_status: "Good".to_string(),
                image_url: None,
            })
            .await
            .unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Monstera", "Snake Plant", "Fiddle Leaf"]);
    }

    #[tokio::test]
    async fn absent_plant_is_none() {
        let repo = MemoryPlantRepo::new();
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }
}
