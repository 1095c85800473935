// Copyright 2025 the Barstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments attached on top of a chart chain.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Size;

use crate::adapter::HeightAdapter;
use crate::chain::{
    BarSegments, ColumnTally, DrawContinuation, LayoutContinuation, RunningDrawState,
    SegmentKind,
};
use crate::config::ChartConfig;
use crate::geometry::LayoutResult;
use crate::legend::LegendItem;
use crate::markers::PlotMarkers;
use crate::render::Renderer;
use crate::style::SegmentStyle;

/// A segment attached to the chain `P`.
///
/// Built with [`BarSegments::stacked_with`], [`BarSegments::alongside`] and their
/// `_with_adapter` variants. Depending on its [`SegmentKind`], the segment either extends each
/// column's current bar or starts a new bar beside it.
pub struct StackedBarChart<P, I: IntoIterator> {
    parent: P,
    kind: SegmentKind,
    values: I,
    adapter: HeightAdapter<I::Item>,
    style: SegmentStyle,
}

impl<P: core::fmt::Debug, I: IntoIterator> core::fmt::Debug for StackedBarChart<P, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackedBarChart")
            .field("kind", &self.kind)
            .field("style", &self.style)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<P, I> StackedBarChart<P, I>
where
    P: BarSegments,
    I: IntoIterator + Clone,
{
    pub(crate) fn new(
        parent: P,
        kind: SegmentKind,
        values: I,
        adapter: HeightAdapter<I::Item>,
        style: impl FnOnce(SegmentStyle) -> SegmentStyle,
    ) -> Self {
        let style = style(SegmentStyle::for_depth(parent.segment_count()));
        Self {
            parent,
            kind,
            values,
            adapter,
            style,
        }
    }

    /// How this segment combines with the chain below it.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// This segment's style.
    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    /// The chain this segment is attached to.
    pub fn parent(&self) -> &P {
        &self.parent
    }
}

impl<P, I> BarSegments for StackedBarChart<P, I>
where
    P: BarSegments,
    I: IntoIterator + Clone,
{
    fn config(&self) -> &ChartConfig {
        self.parent.config()
    }

    fn config_mut(&mut self) -> &mut ChartConfig {
        self.parent.config_mut()
    }

    fn segment_count(&self) -> usize {
        self.parent.segment_count() + 1
    }

    fn collect_legend_items(&self, items: &mut Vec<LegendItem>) {
        self.parent.collect_legend_items(items);
        items.extend(LegendItem::for_segment(&self.style));
    }

    fn layout_columns(
        &self,
        size: Size,
        next: &mut LayoutContinuation<'_>,
    ) -> (LayoutResult, PlotMarkers) {
        let mut values = self.values.clone().into_iter().fuse();
        self.parent
            .layout_columns(size, &mut |tally: &mut ColumnTally| {
                if self.kind == SegmentKind::Series {
                    tally.begin_series();
                }
                let had_value = match values.next() {
                    Some(element) => {
                        tally.add(self.adapter.height(&element));
                        true
                    }
                    None => false,
                };
                let above = next(tally);
                had_value || above
            })
    }

    fn draw_columns(
        &self,
        layout: &LayoutResult,
        renderer: &mut dyn Renderer,
        next: &mut DrawContinuation<'_>,
    ) {
        let mut values = self.values.clone().into_iter().fuse();
        self.parent.draw_columns(
            layout,
            renderer,
            &mut |state: &mut RunningDrawState, renderer: &mut dyn Renderer| {
                let element = values.next();
                if self.kind == SegmentKind::Series {
                    state.begin_series(layout);
                    // A new bar slot is drawn even when this segment has run out of data, so
                    // every laid-out column shows `num_series` bars.
                    if element.is_none() && state.column() < layout.num_columns {
                        state.push_bar(layout, 0.0, &self.style, renderer);
                    }
                }
                let had_value = match element {
                    Some(element) => {
                        let height = self.adapter.height(&element);
                        state.push_bar(layout, height, &self.style, renderer);
                        true
                    }
                    None => false,
                };
                let above = next(state, renderer);
                had_value || above
            },
        );

        assert!(
            values.next().is_none(),
            "segment {} has data beyond the {} laid-out columns; \
             the layout was computed for a different chart",
            self.parent.segment_count(),
            layout.num_columns
        );
    }
}
