//! Borrower and staff registry services

use crate::{
    error::AppResult,
    models::{
        professor::{CreateProfessor, Professor, UpdateProfessor},
        staff::{CreateStaff, Staff, UpdateStaff},
        student::{CreateStudent, Student, UpdateStudent},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search(&self, q: Option<&str>) -> AppResult<Vec<Student>> {
        self.repository.students.search(q).await
    }

    pub async fn get_by_code(&self, code: &str) -> AppResult<Student> {
        self.repository.students.get_by_code(code).await
    }

    pub async fn create(&self, data: &CreateStudent) -> AppResult<Student> {
        self.repository.students.create(data).await
    }

    pub async fn update_by_code(&self, code: &str, data: &UpdateStudent) -> AppResult<Student> {
        let student = self.repository.students.get_by_code(code).await?;
        self.repository.students.update(student.id, data).await
    }

    pub async fn delete_by_code(&self, code: &str) -> AppResult<()> {
        let student = self.repository.students.get_by_code(code).await?;
        self.repository.students.delete(student.id).await
    }
}

#[derive(Clone)]
pub struct ProfessorsService {
    repository: Repository,
}

impl ProfessorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn search(&self, q: Option<&str>) -> AppResult<Vec<Professor>> {
        self.repository.professors.search(q).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Professor> {
        self.repository.professors.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateProfessor) -> AppResult<Professor> {
        self.repository.professors.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateProfessor) -> AppResult<Professor> {
        self.repository.professors.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.professors.delete(id).await
    }
}

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, active_only: bool) -> AppResult<Vec<Staff>> {
        self.repository.staff.list(active_only).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Staff> {
        self.repository.staff.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateStaff) -> AppResult<Staff> {
        self.repository.staff.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateStaff) -> AppResult<Staff> {
        self.repository.staff.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.staff.delete(id).await
    }
}
