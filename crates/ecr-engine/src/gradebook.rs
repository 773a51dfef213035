//! The operations facade: one method per workbook operation, each opening
//! the document store, doing its bounded work, and releasing the handle
//! before returning.

use std::path::Path;

use tracing::{debug, warn};

use ecr_core::{CellKind, CellRef, Document, DocumentStore, SheetId};

use crate::calc::{self, ComputedGrade, RawScores};
use crate::context::WorkbookContext;
use crate::error::EngineError;
use crate::grid;
use crate::layout::{self, Gender, ScoreCategory};
use crate::roster;
use crate::track::{Quarter, Track};

/// Both rosters, read together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rosters {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

/// One student's row on the active quarter sheet: raw category scores plus
/// the formula-derived final grade as the sheet last computed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentScores {
    pub written_works: Vec<String>,
    pub performance_tasks: Vec<String>,
    pub exam: String,
    pub grade: String,
}

impl StudentScores {
    /// The raw score vectors, without the derived grade column.
    pub fn raw(&self) -> RawScores {
        RawScores {
            written_works: self.written_works.clone(),
            performance_tasks: self.performance_tasks.clone(),
            exam: self.exam.clone(),
        }
    }
}

/// Grade-record operations over a document store.
///
/// Writers must be serialized by the caller: at most one in-flight
/// mutating operation per workbook. Contexts are immutable, so concurrent
/// reads against the same context are harmless.
#[derive(Debug, Clone)]
pub struct Gradebook<S> {
    store: S,
}

impl<S: DocumentStore> Gradebook<S> {
    pub fn new(store: S) -> Self {
        Gradebook { store }
    }

    /// Check that the workbook carries every required sheet. On failure the
    /// error lists the missing names, comma-joined in required-table order.
    pub fn verify(&self, path: &Path) -> Result<(), EngineError> {
        let doc = self.store.open_read(path)?;
        let present = doc.sheet_names();

        let missing: Vec<String> = layout::REQUIRED_SHEETS
            .iter()
            .filter(|req| !present.iter().any(|name| name == *req))
            .map(|req| req.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(EngineError::MissingSheets(missing))
        }
    }

    /// Verify the workbook and build a context for the given quarter,
    /// caching the highest-possible-score vectors and the track selector.
    pub fn load(&self, path: &Path, quarter: Quarter) -> Result<WorkbookContext, EngineError> {
        self.verify(path)?;
        let doc = self.store.open_read(path)?;
        Self::build_context(path, quarter, &doc)
    }

    /// Switch the active quarter, re-reading the quarter-bound caches.
    pub fn set_quarter(
        &self,
        ctx: &WorkbookContext,
        quarter: Quarter,
    ) -> Result<WorkbookContext, EngineError> {
        let doc = self.store.open_read(&ctx.path)?;
        Self::build_context(&ctx.path, quarter, &doc)
    }

    fn build_context(
        path: &Path,
        quarter: Quarter,
        doc: &S::Doc,
    ) -> Result<WorkbookContext, EngineError> {
        let grid_sheet = Self::require_sheet(doc, quarter.sheet_name())?;
        let written_works_max = grid::read_row(
            doc,
            grid_sheet,
            ScoreCategory::WrittenWorks.span(),
            layout::MAX_SCORES_ROW,
        );
        let performance_tasks_max = grid::read_row(
            doc,
            grid_sheet,
            ScoreCategory::PerformanceTasks.span(),
            layout::MAX_SCORES_ROW,
        );
        let exam_max = grid::read_cell(
            doc,
            grid_sheet,
            CellRef::new(layout::COL_AF, layout::MAX_SCORES_ROW),
        );

        let input = Self::require_sheet(doc, layout::SHEET_INPUT_DATA)?;
        let label = grid::read_cell(doc, input, layout::TRACK_CELL);
        let track = Track::from_label(&label).unwrap_or_else(|| {
            warn!(%label, "unrecognized track selector, assuming Core Subject");
            Track::CoreSubject
        });
        debug!(%track, ?quarter, "workbook context loaded");

        Ok(WorkbookContext {
            path: path.to_path_buf(),
            quarter,
            track,
            written_works_max,
            performance_tasks_max,
            exam_max,
            sheet_names: doc.sheet_names(),
        })
    }

    fn require_sheet(doc: &S::Doc, name: &str) -> Result<SheetId, EngineError> {
        doc.sheet(name)
            .ok_or_else(|| EngineError::SheetNotFound(name.to_string()))
    }

    /// Read both rosters from INPUT DATA.
    pub fn read_rosters(&self, ctx: &WorkbookContext) -> Result<Rosters, EngineError> {
        let doc = self.store.open_read(&ctx.path)?;
        let input = Self::require_sheet(&doc, layout::SHEET_INPUT_DATA)?;
        Ok(Rosters {
            male: roster::read(&doc, input, Gender::Male.roster_range()),
            female: roster::read(&doc, input, Gender::Female.roster_range()),
        })
    }

    /// Append a student to the gender's roster, re-sort, rewrite and save.
    /// Returns the freshly written, sorted roster.
    pub fn append_student(
        &self,
        ctx: &WorkbookContext,
        gender: Gender,
        name: &str,
    ) -> Result<Vec<String>, EngineError> {
        let mut doc = self.store.open_write(&ctx.path)?;
        let input = Self::require_sheet(&doc, layout::SHEET_INPUT_DATA)?;

        let names = roster::append_and_resort(&mut doc, input, gender.roster_range(), name)?;

        doc.request_full_recalculation();
        doc.save()?;
        Ok(names)
    }

    /// Read one student's row from the active quarter sheet.
    pub fn read_student_scores(
        &self,
        ctx: &WorkbookContext,
        row: u32,
    ) -> Result<StudentScores, EngineError> {
        let doc = self.store.open_read(&ctx.path)?;
        let sheet = Self::require_sheet(&doc, ctx.quarter.sheet_name())?;

        Ok(StudentScores {
            written_works: grid::read_row(&doc, sheet, ScoreCategory::WrittenWorks.span(), row),
            performance_tasks: grid::read_row(
                &doc,
                sheet,
                ScoreCategory::PerformanceTasks.span(),
                row,
            ),
            exam: grid::read_cell(&doc, sheet, CellRef::new(layout::COL_AF, row)),
            grade: grid::read_cell(&doc, sheet, CellRef::new(layout::GRADE_COL, row)),
        })
    }

    /// Rewrite the highest-possible scores for a category on row 11, then
    /// return a context with the caches re-read.
    pub fn edit_max_scores(
        &self,
        ctx: &WorkbookContext,
        category: ScoreCategory,
        values: &[String],
    ) -> Result<WorkbookContext, EngineError> {
        self.write_category(ctx, layout::MAX_SCORES_ROW, category, values)?;
        let doc = self.store.open_read(&ctx.path)?;
        Self::build_context(&ctx.path, ctx.quarter, &doc)
    }

    /// Rewrite a student's scores for a category, then return a context
    /// with the caches re-read.
    pub fn edit_student_scores(
        &self,
        ctx: &WorkbookContext,
        row: u32,
        category: ScoreCategory,
        values: &[String],
    ) -> Result<WorkbookContext, EngineError> {
        self.write_category(ctx, row, category, values)?;
        let doc = self.store.open_read(&ctx.path)?;
        Self::build_context(&ctx.path, ctx.quarter, &doc)
    }

    /// Open for write, rewrite the category's span on `row`, flag the
    /// recalculation, save. The recalculation request only happens on the
    /// success path, after all cells are in place.
    fn write_category(
        &self,
        ctx: &WorkbookContext,
        row: u32,
        category: ScoreCategory,
        values: &[String],
    ) -> Result<(), EngineError> {
        let mut doc = self.store.open_write(&ctx.path)?;
        let sheet = Self::require_sheet(&doc, ctx.quarter.sheet_name())?;

        grid::write_row(&mut doc, sheet, category.span(), row, values, CellKind::Number);

        doc.request_full_recalculation();
        doc.save()?;
        Ok(())
    }

    /// Compute a student's transmuted grade from raw scores and the cached
    /// maxima, weighted by the active track. Pure; touches no document.
    pub fn computed_grade(&self, ctx: &WorkbookContext, raw: &RawScores) -> ComputedGrade {
        calc::computed_grade(
            raw,
            &ctx.written_works_max,
            &ctx.performance_tasks_max,
            &ctx.exam_max,
            ctx.weights(),
        )
    }
}
