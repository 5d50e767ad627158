//! Rooms service

use crate::{
    error::AppResult,
    models::room::{CreateRoom, Room, RoomWithStatus, UpdateRoom},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<RoomWithStatus>> {
        self.repository.rooms.list().await
    }

    pub async fn get_by_code(&self, code: &str) -> AppResult<RoomWithStatus> {
        let room = self.repository.rooms.get_by_code(code).await?;
        let available = self.repository.rooms.is_available(room.id).await?;
        Ok(RoomWithStatus {
            room,
            status: if available {
                crate::models::enums::RoomStatus::Available
            } else {
                crate::models::enums::RoomStatus::Occupied
            },
        })
    }

    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        if let Some(campus_id) = data.campus_id {
            self.repository.campuses.get_by_id(campus_id).await?;
        }
        self.repository.rooms.create(data).await
    }

    pub async fn update_by_code(&self, code: &str, data: &UpdateRoom) -> AppResult<Room> {
        if let Some(campus_id) = data.campus_id {
            self.repository.campuses.get_by_id(campus_id).await?;
        }
        let room = self.repository.rooms.get_by_code(code).await?;
        self.repository.rooms.update(room.id, data).await
    }

    pub async fn delete_by_code(&self, code: &str) -> AppResult<()> {
        let room = self.repository.rooms.get_by_code(code).await?;
        self.repository.rooms.delete(room.id).await
    }
}
