//! Writer use-case service.

use crate::logging::ServiceLogger;
use crate::model::dto::WriterDto;
use crate::model::validation::ValidationError;
use crate::model::writer::{Writer, WriterId};
use crate::repo::writer_repo::WriterRepository;
use crate::service::{ServiceError, ServiceResult};
use chrono::NaiveDate;

const MODULE: &str = "writer_service";

/// Writer service over a writer repository.
///
/// Create and update check field rules only; writers reference nothing.
pub struct WriterService<W: WriterRepository> {
    writers: W,
    logger: ServiceLogger,
}

impl<W: WriterRepository> WriterService<W> {
    pub fn new(writers: W) -> Self {
        Self::with_logger(writers, ServiceLogger::global(module_path!(), MODULE))
    }

    pub fn with_logger(writers: W, logger: ServiceLogger) -> Self {
        Self { writers, logger }
    }

    pub fn find_all(&self) -> ServiceResult<Vec<WriterDto>> {
        let writers = self
            .writers
            .find_all()
            .map_err(|err| self.fail("writer_find_all", err.into()))?;
        self.logger
            .info("writer_find_all", format_args!("count={}", writers.len()));
        Ok(to_dtos(writers))
    }

    pub fn find_by_id(&self, id: WriterId) -> ServiceResult<Option<WriterDto>> {
        self.writers
            .find_by_id(id)
            .map(|writer| writer.map(WriterDto::from))
            .map_err(|err| self.fail("writer_find_by_id", err.into()))
    }

    pub fn find_by_name(&self, name: &str) -> ServiceResult<Vec<WriterDto>> {
        self.writers
            .find_by_name(name)
            .map(to_dtos)
            .map_err(|err| self.fail("writer_find_by_name", err.into()))
    }

    pub fn find_by_birth_date(&self, birth_date: NaiveDate) -> ServiceResult<Vec<WriterDto>> {
        self.writers
            .find_by_birth_date(birth_date)
            .map(to_dtos)
            .map_err(|err| self.fail("writer_find_by_birth_date", err.into()))
    }

    pub fn find_by_name_and_birth_date(
        &self,
        name: &str,
        birth_date: NaiveDate,
    ) -> ServiceResult<Vec<WriterDto>> {
        self.writers
            .find_by_name_and_birth_date(name, birth_date)
            .map(to_dtos)
            .map_err(|err| self.fail("writer_find_by_name_and_birth_date", err.into()))
    }

    /// Inserts a new writer; any supplied id is discarded.
    pub fn create(&self, dto: WriterDto) -> ServiceResult<WriterDto> {
        const EVENT: &str = "writer_create";

        let mut writer = Writer::from(dto);
        writer
            .validate()
            .map_err(|err| self.fail(EVENT, err.into()))?;

        writer.id = None;
        let saved = self
            .writers
            .save(&writer)
            .map_err(|err| self.fail(EVENT, err.into()))?;
        Ok(saved.into())
    }

    /// Overwrites an existing writer.
    ///
    /// Field rules are checked before existence, so an invalid body on an
    /// unknown id reports `Validation`.
    ///
    /// # Errors
    /// - `Validation` when a field rule fails or `dto.id` is missing.
    /// - `WriterNotFound` when `dto.id` does not resolve.
    pub fn update(&self, dto: WriterDto) -> ServiceResult<WriterDto> {
        const EVENT: &str = "writer_update";

        let writer = Writer::from(dto);
        let id = writer
            .id
            .ok_or_else(|| self.fail(EVENT, ValidationError::MissingId("writer").into()))?;
        writer
            .validate()
            .map_err(|err| self.fail(EVENT, err.into()))?;
        self.ensure_writer_exists(EVENT, id)?;

        let saved = self
            .writers
            .save(&writer)
            .map_err(|err| self.fail(EVENT, err.into()))?;
        Ok(saved.into())
    }

    /// Deletes an existing writer.
    ///
    /// # Errors
    /// - `WriterNotFound` when `id` does not resolve.
    /// - `Repo(ConstraintViolation)` while books still reference the writer.
    pub fn delete(&self, id: WriterId) -> ServiceResult<()> {
        const EVENT: &str = "writer_delete";

        self.ensure_writer_exists(EVENT, id)?;
        self.writers
            .delete(id)
            .map_err(|err| self.fail(EVENT, err.into()))
    }

    fn ensure_writer_exists(&self, event: &str, id: WriterId) -> ServiceResult<()> {
        let exists = self
            .writers
            .exists_by_id(id)
            .map_err(|err| self.fail(event, err.into()))?;
        if !exists {
            return Err(self.fail(event, ServiceError::WriterNotFound(id)));
        }
        Ok(())
    }

    fn fail(&self, event: &str, err: ServiceError) -> ServiceError {
        self.logger.error(
            event,
            format_args!("error_code={} error={err}", err.code()),
        );
        err
    }
}

fn to_dtos(writers: Vec<Writer>) -> Vec<WriterDto> {
    writers.into_iter().map(WriterDto::from).collect()
}
