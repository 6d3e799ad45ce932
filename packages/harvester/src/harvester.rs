//! Main harvester service that ties all components together.

use std::fs;
use std::path::Path;

use crate::builder::TaxonomyBuilder;
use crate::enrich::apply_axis_names;
use crate::error::Result;
use crate::segmenting::{segment, CompiledGrammar, GrammarConfig, Segment};
use crate::text::normalize_description;
use crate::types::{Area, AxisNames, Level, Taxonomy};

/// Rebuild the taxonomy from a text buffer and apply canonical axis names.
///
/// # Arguments
/// * `text` - The full extracted text
/// * `grammar` - Marker words for both header grains
/// * `names` - Axis id to display name table
///
/// # Returns
/// A `Taxonomy` with the axis tree and any heading warnings, or the grammar
/// error. A partially built tree is never returned.
pub fn harvest(text: &str, grammar: &GrammarConfig, names: &AxisNames) -> Result<Taxonomy> {
    let mut taxonomy = parse_taxonomy(text, grammar)?;
    apply_axis_names(&mut taxonomy.axes, names);
    Ok(taxonomy)
}

/// Read a text file and harvest it.
pub fn harvest_file(path: &Path, grammar: &GrammarConfig, names: &AxisNames) -> Result<Taxonomy> {
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Read extracted text");
    harvest(&text, grammar, names)
}

/// Rebuild the taxonomy from a text buffer, leaving placeholder axis names.
///
/// An empty or headerless buffer yields an empty taxonomy.
pub fn parse_taxonomy(text: &str, grammar: &GrammarConfig) -> Result<Taxonomy> {
    let compiled = grammar.compile()?;
    let mut builder = TaxonomyBuilder::new();
    let mut warnings = Vec::new();

    let area_segments = segment(&compiled.area, text);
    warnings.extend(
        compiled
            .area_near_miss
            .scan(text, &starts(&area_segments))
            .iter()
            .map(|miss| (miss.offset, miss.to_warning(text, 0))),
    );

    for area_segment in &area_segments {
        let axis_id: u32 = area_segment.header.number("axis")?;
        let letter = area_segment.header.required("area")?;
        let name = area_segment.header.required("name")?.trim().to_string();

        let levels = parse_levels(&compiled, text, area_segment, &mut warnings)?;

        tracing::debug!(
            axis = axis_id,
            area = %letter,
            levels = levels.len(),
            "Parsed area"
        );

        builder.push_area(
            axis_id,
            Area {
                id: format!("{axis_id}{letter}"),
                name,
                levels,
            },
        );
    }

    // Area and Level scans run separately; report in document order
    warnings.sort_by_key(|(offset, _)| *offset);
    let warnings: Vec<String> = warnings.into_iter().map(|(_, warning)| warning).collect();
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let axes = builder.build();
    tracing::info!(
        axes = axes.len(),
        areas = area_segments.len(),
        warnings = warnings.len(),
        "Rebuilt taxonomy"
    );

    Ok(Taxonomy { axes, warnings })
}

/// Segment one area body into levels.
fn parse_levels(
    compiled: &CompiledGrammar,
    text: &str,
    area_segment: &Segment<'_>,
    warnings: &mut Vec<(usize, String)>,
) -> Result<Vec<Level>> {
    let level_segments = segment(&compiled.level, area_segment.body);

    warnings.extend(
        compiled
            .level_near_miss
            .scan(area_segment.body, &starts(&level_segments))
            .iter()
            .map(|miss| {
                let base = area_segment.span.start;
                (base + miss.offset, miss.to_warning(text, base))
            }),
    );

    level_segments
        .iter()
        .map(|level_segment| {
            Ok(Level {
                level: level_segment.header.number("level")?,
                title: level_segment.header.required("title")?.trim().to_string(),
                description: normalize_description(level_segment.body),
            })
        })
        .collect()
}

/// Header start offsets, ascending.
fn starts(segments: &[Segment<'_>]) -> Vec<usize> {
    segments.iter().map(|s| s.header.start()).collect()
}
