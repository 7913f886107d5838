/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animation of explicit grid track lists.
//!
//! <https://drafts.csswg.org/css-grid/#track-sizing>

use log::debug;

use super::{Animate, AnimationContext, Procedure, animate_discrete, animate_length_percentage};
use crate::calc::CalculationContext;
use crate::dom::TElement;
use crate::values::grid::{ExpandedGridTracks, ExplicitGridTrack, GridRepeat, GridSize};
use crate::values::{GridTrackSizeList, StyleValue, StyleValueKind};

/// Interpolates two track lists with the same number of tracks. Returns
/// `None` if the lists can't be matched up track by track.
pub fn interpolate_grid_track_size_list(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    let (StyleValueKind::GridTrackSizeList(from), StyleValueKind::GridTrackSizeList(to)) =
        (from.kind(), to.kind())
    else {
        return None;
    };
    let context = AnimationContext::new(element, calculation_context);
    animate_grid_track_size_list(&context, from, to, Procedure::Interpolate { progress })
        .ok()
        .map(StyleValue::from)
}

pub(crate) fn animate_grid_track_size_list(
    context: &AnimationContext,
    from: &GridTrackSizeList,
    to: &GridTrackSizeList,
    procedure: Procedure,
) -> Result<GridTrackSizeList, ()> {
    let from = from.expand();
    let to = to.expand();
    if from.tracks.len() != to.tracks.len() {
        debug!(
            "Track lists of {} and {} tracks don't interpolate",
            from.tracks.len(),
            to.tracks.len()
        );
        return Err(());
    }

    let tracks = from
        .tracks
        .iter()
        .zip(to.tracks.iter())
        .map(|(from, to)| animate_track(context, from, to, procedure))
        .collect::<Result<Vec<_>, _>>()?;
    let line_names = from
        .line_names
        .iter()
        .zip(to.line_names.iter())
        .map(|(from, to)| animate_discrete(from, to, procedure))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ExpandedGridTracks { tracks, line_names }.into())
}

fn animate_track(
    context: &AnimationContext,
    from: &ExplicitGridTrack,
    to: &ExplicitGridTrack,
    procedure: Procedure,
) -> Result<ExplicitGridTrack, ()> {
    Ok(match (from, to) {
        (ExplicitGridTrack::Repeat(from), ExplicitGridTrack::Repeat(to)) => {
            ExplicitGridTrack::Repeat(animate_repeat(context, from, to, procedure)?)
        },
        (ExplicitGridTrack::Repeat(..), _) | (_, ExplicitGridTrack::Repeat(..)) => return Err(()),
        (
            ExplicitGridTrack::MinMax { min: from_min, max: from_max },
            ExplicitGridTrack::MinMax { min: to_min, max: to_max },
        ) => ExplicitGridTrack::MinMax {
            min: animate_grid_size(context, from_min, to_min, procedure)?,
            max: animate_grid_size(context, from_max, to_max, procedure)?,
        },
        (ExplicitGridTrack::Size(from), ExplicitGridTrack::Size(to)) => {
            ExplicitGridTrack::Size(animate_grid_size(context, from, to, procedure)?)
        },
        _ => animate_discrete(from, to, procedure)?,
    })
}

fn animate_repeat(
    context: &AnimationContext,
    from: &GridRepeat,
    to: &GridRepeat,
    procedure: Procedure,
) -> Result<GridRepeat, ()> {
    if from.repeat_type != to.repeat_type ||
        from.count != to.count ||
        from.tracks.expand().tracks.len() != to.tracks.expand().tracks.len()
    {
        return Err(());
    }
    Ok(GridRepeat {
        repeat_type: from.repeat_type,
        count: from.count,
        tracks: animate_grid_track_size_list(context, &from.tracks, &to.tracks, procedure)?,
    })
}

/// Flexible sizes and length-percentages interpolate. Everything else, and
/// mixes of the two, snap at the halfway point.
fn animate_grid_size(
    context: &AnimationContext,
    from: &GridSize,
    to: &GridSize,
    procedure: Procedure,
) -> Result<GridSize, ()> {
    match (from, to) {
        (GridSize::Flex(from), GridSize::Flex(to)) => {
            Ok(GridSize::Flex(from.animate(to, procedure)?.max(0.)))
        },
        (GridSize::LengthPercentage(from_value), GridSize::LengthPercentage(to_value)) => {
            match animate_length_percentage(context, from_value, to_value, procedure, None) {
                Ok(value) => Ok(GridSize::LengthPercentage(value)),
                Err(()) => animate_discrete(from, to, procedure),
            }
        },
        _ => animate_discrete(from, to, procedure),
    }
}
