use super::{clip_polygons, ClipOp, ClipOptions};
use crate::core::traits::{ControlFlow, Real};
use crate::core::Control;
use crate::geometry::{MultiPolygon, Polygon};
use crate::ClipError;

/// Repair applied to a multipolygon whose polygons overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correction {
    /// Merge every group of overlapping polygons into one polygon.
    UnionIntersectingPolygons,
    /// Subtract later polygons from earlier ones, earlier polygons lose the overlapping area.
    DiffIntersectingPolygons,
}

/// Merge overlapping polygons of `multi_polygon` until all are disjoint (touching at points is
/// allowed).
///
/// # Examples
///
/// ```
/// # use ringclip::*;
/// let square = polygon![[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
/// let mp = MultiPolygon::new(vec![square.clone(), square.clone()]);
/// let corrected = union_correct(&mp, &ClipOptions::new()).unwrap();
/// assert_eq!(corrected.polygons, vec![square]);
/// ```
pub fn union_correct<T>(
    multi_polygon: &MultiPolygon<T>,
    options: &ClipOptions<T>,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
{
    union_correct_with_control(multi_polygon, options, &mut |_, _| Control::<()>::Continue)
}

/// Same as [union_correct] but calls `control` with the indexes of each pair about to be merged,
/// a break stops the loop and returns [ClipError::Cancelled].
pub fn union_correct_with_control<T, C, F>(
    multi_polygon: &MultiPolygon<T>,
    options: &ClipOptions<T>,
    control: &mut F,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
    C: ControlFlow,
    F: FnMut(usize, usize) -> C,
{
    let eps = options.pos_equal_eps;
    for p in multi_polygon.iter() {
        p.validate(eps)?;
    }

    let mut polygons: Vec<Polygon<T>> = multi_polygon.iter().map(|p| p.normalized()).collect();
    let mut keep = vec![true; polygons.len()];

    for i in 0..polygons.len() {
        if !keep[i] {
            continue;
        }

        let mut j = 0;
        while j < polygons.len() {
            if j == i || !keep[j] || !extents_overlap(&polygons[i], &polygons[j], eps) {
                j += 1;
                continue;
            }

            if control(i, j).should_break() {
                return Err(ClipError::Cancelled);
            }

            let mut merged = clip_polygons(&polygons[i], &polygons[j], ClipOp::Union, options)?;
            if merged.len() == 1 {
                log::trace!("union correction merged polygon {} into {}", j, i);
                if let Some(p) = merged.pop() {
                    polygons[i] = p;
                }
                keep[j] = false;
                // the grown polygon may now overlap polygons already checked
                j = 0;
            } else {
                j += 1;
            }
        }
    }

    Ok(polygons
        .into_iter()
        .zip(keep)
        .filter_map(|(p, k)| if k { Some(p) } else { None })
        .collect())
}

/// Subtract later polygons of `multi_polygon` from earlier ones until all are disjoint.
///
/// A polygon split into several pieces keeps its first piece in place and the remaining pieces
/// are appended, a polygon fully covered by later polygons is dropped.
pub fn diff_correct<T>(
    multi_polygon: &MultiPolygon<T>,
    options: &ClipOptions<T>,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
{
    diff_correct_with_control(multi_polygon, options, &mut |_, _| Control::<()>::Continue)
}

/// Same as [diff_correct] but calls `control` with the indexes of each pair about to be
/// subtracted, a break stops the loop and returns [ClipError::Cancelled].
pub fn diff_correct_with_control<T, C, F>(
    multi_polygon: &MultiPolygon<T>,
    options: &ClipOptions<T>,
    control: &mut F,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
    C: ControlFlow,
    F: FnMut(usize, usize) -> C,
{
    let eps = options.pos_equal_eps;
    for p in multi_polygon.iter() {
        p.validate(eps)?;
    }

    let mut polygons: Vec<Polygon<T>> = multi_polygon.iter().map(|p| p.normalized()).collect();
    let mut result = Vec::with_capacity(polygons.len());

    let mut i = 0;
    while i < polygons.len() {
        let mut pieces = vec![polygons[i].clone()];
        let mut j = i + 1;
        while j < polygons.len() && !pieces.is_empty() {
            let mut next = Vec::with_capacity(pieces.len());
            for piece in pieces {
                if !extents_overlap(&piece, &polygons[j], eps) {
                    next.push(piece);
                    continue;
                }

                if control(i, j).should_break() {
                    return Err(ClipError::Cancelled);
                }

                next.extend(clip_polygons(&piece, &polygons[j], ClipOp::Difference, options)?);
            }
            pieces = next;
            j += 1;
        }

        if pieces.is_empty() {
            log::trace!("diff correction dropped covered polygon {}", i);
        }

        let mut pieces = pieces.into_iter();
        if let Some(first) = pieces.next() {
            result.push(first);
        }
        let before = polygons.len();
        polygons.extend(pieces);
        if polygons.len() > before {
            log::trace!(
                "diff correction split polygon {} into {} pieces",
                i,
                polygons.len() - before + 1
            );
        }

        i += 1;
    }

    Ok(MultiPolygon::new(result))
}

/// Apply each of `corrections` in order.
pub fn apply_corrections<T>(
    multi_polygon: &MultiPolygon<T>,
    corrections: &[Correction],
    options: &ClipOptions<T>,
) -> Result<MultiPolygon<T>, ClipError>
where
    T: Real,
{
    let mut current = multi_polygon.clone();
    for correction in corrections {
        current = match correction {
            Correction::UnionIntersectingPolygons => union_correct(&current, options)?,
            Correction::DiffIntersectingPolygons => diff_correct(&current, options)?,
        };
    }
    Ok(current)
}

fn extents_overlap<T>(a: &Polygon<T>, b: &Polygon<T>, eps: T) -> bool
where
    T: Real,
{
    match (a.extent(), b.extent()) {
        (Some(ea), Some(eb)) => ea.expanded(eps).overlaps(&eb),
        _ => false,
    }
}

impl<T> MultiPolygon<T>
where
    T: Real,
{
    /// Apply `correction` using default options.
    pub fn corrected(&self, correction: Correction) -> Result<MultiPolygon<T>, ClipError> {
        apply_corrections(self, &[correction], &ClipOptions::new())
    }
}
