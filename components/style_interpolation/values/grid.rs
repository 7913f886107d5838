/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Explicit grid track lists, as used by `grid-template-rows` and
//! `grid-template-columns`.

use super::{CSSFloat, StyleValue};

/// A `<track-breadth>`, or `fit-content()`.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSize {
    /// A flexible size, in `fr`.
    Flex(CSSFloat),
    LengthPercentage(StyleValue),
    Auto,
    MinContent,
    MaxContent,
    FitContent(StyleValue),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GridRepeatType {
    Fixed,
    AutoFill,
    AutoFit,
}

/// A `repeat()` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRepeat {
    pub repeat_type: GridRepeatType,
    /// The repetition count; only meaningful for `GridRepeatType::Fixed`.
    pub count: u32,
    pub tracks: GridTrackSizeList,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExplicitGridTrack {
    Size(GridSize),
    MinMax { min: GridSize, max: GridSize },
    Repeat(GridRepeat),
}

/// A bracketed block of line names, e.g. `[main-start content]`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct GridLineNames(pub Vec<String>);

#[derive(Clone, Debug, PartialEq)]
pub enum GridTrackComponent {
    LineNames(GridLineNames),
    Track(ExplicitGridTrack),
}

/// A track list as written: tracks interleaved with line name blocks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridTrackSizeList(pub Vec<GridTrackComponent>);

/// A track list split into its tracks and the line names around them.
///
/// `line_names[i]` is the block before `tracks[i]`; the last entry is the
/// block after the final track, so there is always one more slot than
/// tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandedGridTracks {
    pub tracks: Vec<ExplicitGridTrack>,
    pub line_names: Vec<Option<GridLineNames>>,
}

impl GridTrackSizeList {
    pub fn expand(&self) -> ExpandedGridTracks {
        let mut tracks = vec![];
        let mut line_names: Vec<Option<GridLineNames>> = vec![None];
        for component in &self.0 {
            match *component {
                GridTrackComponent::LineNames(ref names) => {
                    // Adjacent blocks merge, as `[a] [b]` is `[a b]`.
                    match line_names.last_mut() {
                        Some(Some(existing)) => existing.0.extend(names.0.iter().cloned()),
                        Some(slot) => *slot = Some(names.clone()),
                        None => line_names.push(Some(names.clone())),
                    }
                },
                GridTrackComponent::Track(ref track) => {
                    tracks.push(track.clone());
                    line_names.push(None);
                },
            }
        }
        ExpandedGridTracks { tracks, line_names }
    }
}

impl From<ExpandedGridTracks> for GridTrackSizeList {
    fn from(expanded: ExpandedGridTracks) -> Self {
        let mut components = Vec::with_capacity(expanded.tracks.len() * 2 + 1);
        let mut line_names = expanded.line_names.into_iter();
        for track in expanded.tracks {
            if let Some(Some(names)) = line_names.next() {
                components.push(GridTrackComponent::LineNames(names));
            }
            components.push(GridTrackComponent::Track(track));
        }
        if let Some(Some(names)) = line_names.next() {
            components.push(GridTrackComponent::LineNames(names));
        }
        GridTrackSizeList(components)
    }
}
