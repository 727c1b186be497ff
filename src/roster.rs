//! The fixed demonstration hierarchy from the exercise

use generational_arena::Index;
use tracing::instrument;

use crate::arena::OrgArena;
use crate::errors::HierarchyResult;

/// Sample hierarchy plus the indices the demonstration reports on.
///
/// Shape:
/// ```text
/// Sasu
/// ├── Emilia
/// │   ├── Erkki
/// │   ├── Matti
/// │   └── Antti
/// └── Kjell
/// ```
#[derive(Debug)]
pub struct SampleOrg {
    pub arena: OrgArena,
    pub sasu: Index,
    pub emilia: Index,
    pub antti: Index,
}

/// Builds the six-employee demonstration hierarchy.
#[instrument(level = "debug")]
pub fn sample_org() -> HierarchyResult<SampleOrg> {
    let mut arena = OrgArena::new();

    let sasu = arena.hire("Sasu");
    let erkki = arena.hire("Erkki");
    let matti = arena.hire("Matti");
    let emilia = arena.hire("Emilia");
    let antti = arena.hire("Antti");
    let kjell = arena.hire("Kjell");

    arena.assign_report(sasu, emilia)?;
    arena.assign_report(sasu, kjell)?;
    arena.assign_report(emilia, erkki)?;
    arena.assign_report(emilia, matti)?;
    arena.assign_report(emilia, antti)?;

    Ok(SampleOrg {
        arena,
        sasu,
        emilia,
        antti,
    })
}
