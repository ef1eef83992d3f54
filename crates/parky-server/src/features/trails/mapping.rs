//! Record to transfer-object mapping for trails

use parky_common::types::{Difficulty, TrailDto};

use crate::models::{Trail, TrailDifficulty};

impl From<TrailDifficulty> for Difficulty {
    fn from(difficulty: TrailDifficulty) -> Self {
        match difficulty {
            TrailDifficulty::Easy => Difficulty::Easy,
            TrailDifficulty::Moderate => Difficulty::Moderate,
            TrailDifficulty::Difficult => Difficulty::Difficult,
            TrailDifficulty::Expert => Difficulty::Expert,
        }
    }
}

impl From<Trail> for TrailDto {
    fn from(trail: Trail) -> Self {
        TrailDto {
            id: trail.id,
            name: trail.name,
            distance: trail.distance,
            elevation: trail.elevation,
            difficulty: trail.difficulty.into(),
            national_park_id: trail.national_park_id,
            date_created: trail.created_at,
        }
    }
}
