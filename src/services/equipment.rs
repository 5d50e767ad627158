//! Equipment service (inventory items and room-fixed units)

use crate::{
    error::AppResult,
    models::{
        enums::EquipmentStatus,
        equipment::{
            CreateEquipment, CreateRoomUnit, Equipment, RoomUnit, UpdateEquipment, UpdateRoomUnit,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, status: Option<EquipmentStatus>) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list(status).await
    }

    pub async fn get_by_code(&self, code: &str) -> AppResult<Equipment> {
        self.repository.equipment.get_by_code(code).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        self.repository.equipment.create(data).await
    }

    pub async fn update_by_code(&self, code: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.get_by_code(code).await?;
        self.repository.equipment.update(equipment.id, data).await
    }

    pub async fn delete_by_code(&self, code: &str) -> AppResult<()> {
        let equipment = self.repository.equipment.get_by_code(code).await?;
        self.repository.equipment.delete(equipment.id).await
    }

    // Room-fixed units

    pub async fn list_units(&self) -> AppResult<Vec<RoomUnit>> {
        self.repository.units.list().await
    }

    pub async fn list_units_by_room(&self, room_code: &str) -> AppResult<Vec<RoomUnit>> {
        let room = self.repository.rooms.get_by_code(room_code).await?;
        self.repository.units.list_by_room(room.id).await
    }

    pub async fn get_unit(&self, id: i64) -> AppResult<RoomUnit> {
        self.repository.units.get_by_id(id).await
    }

    pub async fn create_unit(&self, data: &CreateRoomUnit) -> AppResult<RoomUnit> {
        self.repository.rooms.get_by_id(data.room_id).await?;
        self.repository.units.create(data).await
    }

    pub async fn update_unit(&self, id: i64, data: &UpdateRoomUnit) -> AppResult<RoomUnit> {
        self.repository.units.update(id, data).await
    }

    pub async fn delete_unit(&self, id: i64) -> AppResult<()> {
        self.repository.units.delete(id).await
    }
}
