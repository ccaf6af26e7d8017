//! Subcommand execution.

use std::io::Write;

use anyhow::Context;
use plotkit_core::{AppState, ElementId, LayoutId};
use plotkit_designer::renderer::{
    dimension_labels, format_meters, rasterize, render_commands, RenderScale,
};
use plotkit_designer::{element_summaries, LayoutAction, LayoutSelection};
use plotkit_settings::{Config, DurableStore};
use plotkit_sync::LayoutSession;

use crate::cli::Command;

/// Maps a mutating subcommand to its action; `None` for read-only ones.
pub fn action_for(command: &Command, state: &AppState) -> Option<LayoutAction> {
    let action = match command {
        Command::Add {
            width,
            height,
            name,
        } => match (width, height) {
            (None, None) => LayoutAction::add_staged(state, name.clone()),
            _ => LayoutAction::AddElement {
                width: width.unwrap_or(state.new_element_width),
                height: height.unwrap_or(state.new_element_height),
                name: name.clone(),
            },
        },
        Command::Remove { id } => LayoutAction::RemoveElement(ElementId(*id)),
        Command::Move { id, x, y } => LayoutAction::MoveElement {
            id: ElementId(*id),
            x: *x,
            y: *y,
        },
        Command::Rename { id, name } => LayoutAction::RenameElement {
            id: ElementId(*id),
            name: name.clone(),
        },
        Command::Resize { width, height } => LayoutAction::ResizeLand {
            width: *width,
            height: *height,
        },
        Command::Stage { width, height } => LayoutAction::SetNewElementSize {
            width: *width,
            height: *height,
        },
        Command::Save { name } => LayoutAction::SaveLayout { name: name.clone() },
        Command::Load { layout } => {
            LayoutAction::LoadLayout(LayoutSelection::from(layout.as_str()))
        }
        Command::Delete { id } => LayoutAction::DeleteLayout(match id {
            Some(id) => Some(LayoutId::from(id.as_str())),
            None => state.current_layout_id.clone(),
        }),
        Command::Show | Command::Share | Command::Render { .. } => return None,
    };
    Some(action)
}

/// Runs one subcommand against an open session, writing results to `out`.
pub fn run<S, W>(
    command: &Command,
    session: &mut LayoutSession<S>,
    config: &Config,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: DurableStore,
    W: Write,
{
    if let Some(action) = action_for(command, session.state()) {
        let name = action.name();
        session
            .dispatch(action)
            .with_context(|| format!("{} was not applied", name))?;
        show(session, out)?;
        return Ok(());
    }

    match command {
        Command::Share => {
            writeln!(out, "{}", session.share_link()?)?;
        }
        Command::Render {
            out: path,
            mobile,
            dimensions,
        } => {
            let scale = render_scale(config, *mobile);
            let state = session.state();
            let mut commands =
                render_commands(state.land_width, state.land_height, &state.elements, scale);
            if *dimensions {
                commands.extend(dimension_labels(state.land_width, state.land_height, scale));
            }
            rasterize(&commands)
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Rendered {}", path.display())?;
        }
        _ => show(session, out)?,
    }
    Ok(())
}

fn render_scale(config: &Config, mobile: bool) -> f64 {
    let scale = RenderScale {
        desktop: config.render.desktop_scale,
        mobile: config.render.mobile_scale,
        mobile_breakpoint: config.render.mobile_breakpoint_px,
    };
    if mobile {
        scale.mobile
    } else {
        scale.scale_for(config.render.viewport_width_px)
    }
}

/// Prints the land, the element list and the saved layouts.
pub fn show<S: DurableStore, W: Write>(
    session: &LayoutSession<S>,
    out: &mut W,
) -> anyhow::Result<()> {
    let state = session.state();

    writeln!(
        out,
        "Land: {}m x {}m",
        format_meters(state.land_width),
        format_meters(state.land_height)
    )?;
    writeln!(
        out,
        "New elements: {}m x {}m",
        format_meters(state.new_element_width),
        format_meters(state.new_element_height)
    )?;

    writeln!(out, "Elements ({}):", state.elements.len())?;
    for summary in element_summaries(state) {
        writeln!(out, "  [{}] {}: {}", summary.id, summary.name, summary.detail)?;
    }

    writeln!(out, "Saved layouts ({}):", state.saved_layouts.len())?;
    for layout in &state.saved_layouts {
        let marker = if state.current_layout_id.as_ref() == Some(&layout.id) {
            "*"
        } else {
            " "
        };
        writeln!(out, " {} [{}] {}", marker, layout.id, layout.name)?;
    }

    Ok(())
}
