//! Campus and curriculum-project services

use crate::{
    error::AppResult,
    models::{
        campus::{Campus, CreateCampus, UpdateCampus},
        project::{CreateProject, Project, UpdateProject},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CampusesService {
    repository: Repository,
}

impl CampusesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Campus>> {
        self.repository.campuses.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Campus> {
        self.repository.campuses.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateCampus) -> AppResult<Campus> {
        self.repository.campuses.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateCampus) -> AppResult<Campus> {
        self.repository.campuses.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.campuses.delete(id).await
    }
}

#[derive(Clone)]
pub struct ProjectsService {
    repository: Repository,
}

impl ProjectsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Project>> {
        self.repository.projects.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Project> {
        self.repository.projects.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        if let Some(professor_id) = data.professor_id {
            self.repository.professors.get_by_id(professor_id).await?;
        }
        self.repository.projects.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateProject) -> AppResult<Project> {
        if let Some(professor_id) = data.professor_id {
            self.repository.professors.get_by_id(professor_id).await?;
        }
        self.repository.projects.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.projects.delete(id).await
    }
}
