//! Task list screen.
//!
//! Renders the searchable, paginated task table with per-row actions
//! (run, view, edit, delete) and the derived last-execution cells.

use iced::widget::{button, column, container, horizontal_rule, horizontal_space, row, text, Column, Space};
use iced::{Alignment, Background, Border, Element, Font, Length, Padding};
use lucide_icons::Icon;

use taskdeck_types::Task;

use crate::appearance::{self, Palette};
use crate::message::Message;
use crate::util::date_format;
use crate::widget::{self, icon};

/// Tasks shown per page.
pub const PAGE_SIZE: usize = 8;

/// Sortable columns of the task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Cycle a column's sort state: ascending, then descending, then off.
pub fn next_sort(
    current: Option<(SortKey, SortDirection)>,
    key: SortKey,
) -> Option<(SortKey, SortDirection)> {
    match current {
        Some((active, SortDirection::Ascending)) if active == key => {
            Some((key, SortDirection::Descending))
        }
        Some((active, SortDirection::Descending)) if active == key => None,
        _ => Some((key, SortDirection::Ascending)),
    }
}

/// Number of pages needed for `total` tasks; at least one.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of tasks visible on `page`, after sorting.
pub fn visible_page(
    tasks: &[Task],
    sort: Option<(SortKey, SortDirection)>,
    page: usize,
) -> Vec<&Task> {
    let mut rows: Vec<&Task> = tasks.iter().collect();
    if let Some((key, direction)) = sort {
        rows.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortKey::Owner => a.owner.to_lowercase().cmp(&b.owner.to_lowercase()),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    rows.into_iter().skip(page * PAGE_SIZE).take(PAGE_SIZE).collect()
}

/// State for the task list screen
pub struct TasksScreenState<'a> {
    pub tasks: &'a [Task],
    pub loading: bool,
    pub initialized: bool,
    pub search_value: &'a str,
    pub page: usize,
    pub sort: Option<(SortKey, SortDirection)>,
    pub executing_task_id: Option<&'a str>,
    pub spinner_frame: usize,
}

/// Main view function for the task list screen
pub fn view<'a>(state: TasksScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = view_header(&state, palette);
    let subtitle = text("Create, search, execute, and manage automation tasks.")
        .size(13)
        .color(palette.text_secondary);
    let search = view_search(&state, palette);

    let content: Element<'a, Message> = if !state.initialized {
        view_loading(&state, palette)
    } else if state.tasks.is_empty() {
        view_empty(palette)
    } else {
        view_table(&state, palette)
    };

    column![header, subtitle, search, content]
        .spacing(16)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header<'a>(state: &TasksScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let syncing: Element<'a, Message> = if state.loading && state.initialized {
        text("syncing...")
            .size(12)
            .color(palette.accent_light)
            .font(Font::MONOSPACE)
            .into()
    } else {
        Space::new(0, 0).into()
    };

    let refresh_btn = widget::icon_button(Icon::RefreshCw, Some(Message::RefreshPressed), palette);
    let create_btn = widget::primary_button("New Task", Some(Message::OpenCreateForm), palette);

    widget::page_header(
        "Task dashboard",
        row![syncing, Space::with_width(8), refresh_btn, Space::with_width(8), create_btn]
            .align_y(Alignment::Center),
        palette,
    )
}

fn view_search<'a>(state: &TasksScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let input = widget::form_text_input(
        "Search tasks by name",
        state.search_value,
        Message::SearchInputChanged,
        palette,
    )
    .on_submit(Message::SearchSubmitted)
    .width(Length::Fill);

    let search_btn = widget::icon_button(Icon::Search, Some(Message::SearchSubmitted), palette);

    row![input, search_btn]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn view_loading<'a>(state: &TasksScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    container(
        row![
            widget::spinner(state.spinner_frame, palette),
            text("Loading tasks...").size(14).color(palette.text_muted),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_empty(palette: &Palette) -> Element<'_, Message> {
    widget::card(
        container(
            column![
                text("No tasks found").size(16).color(palette.text),
                text("Create a task to get started or adjust your search query.")
                    .size(13)
                    .color(palette.text_secondary),
                Space::with_height(8),
                widget::primary_button(
                    "Create your first task",
                    Some(Message::OpenCreateForm),
                    palette,
                ),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(32),
        palette,
    )
}

fn view_table<'a>(state: &TasksScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let mut body: Vec<Element<'a, Message>> = vec![view_column_headers(state, palette)];
    body.push(horizontal_rule(1).into());

    for task in visible_page(state.tasks, state.sort, state.page) {
        body.push(view_row(task, state, palette));
        body.push(horizontal_rule(1).into());
    }

    body.push(view_pagination(state, palette));

    widget::card(Column::from_vec(body).spacing(6).width(Length::Fill), palette)
}

fn view_column_headers<'a>(
    state: &TasksScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let name = sort_header("Name", SortKey::Name, state.sort, palette);
    let owner = sort_header("Owner", SortKey::Owner, state.sort, palette);

    row![
        container(name).width(Length::FillPortion(3)),
        container(owner).width(Length::FillPortion(2)),
        container(header_label("Command", palette)).width(Length::FillPortion(4)),
        container(header_label("Last Execution", palette)).width(Length::FillPortion(3)),
        container(header_label("Actions", palette)).width(Length::Fixed(150.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn header_label<'a>(label: &'a str, palette: &'a Palette) -> Element<'a, Message> {
    text(label).size(12).color(palette.text_secondary).into()
}

/// Clickable column header that cycles the sort order.
fn sort_header<'a>(
    label: &'a str,
    key: SortKey,
    sort: Option<(SortKey, SortDirection)>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let indicator: Element<'a, Message> = match sort {
        Some((active, SortDirection::Ascending)) if active == key => {
            icon(Icon::ChevronUp).size(11).color(palette.accent_light).into()
        }
        Some((active, SortDirection::Descending)) if active == key => {
            icon(Icon::ChevronDown).size(11).color(palette.accent_light).into()
        }
        _ => Space::new(0, 0).into(),
    };

    let label_color = palette.text_secondary;
    button(
        row![text(label).size(12).color(label_color), indicator]
            .spacing(4)
            .align_y(Alignment::Center),
    )
    .on_press(Message::SortBy(key))
    .padding(0)
    .style(|_, _| button::Style {
        background: None,
        ..Default::default()
    })
    .into()
}

fn view_row<'a>(
    task: &'a Task,
    state: &TasksScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let name = text(&task.name).size(13).color(palette.text);
    let owner = text(&task.owner).size(13).color(palette.text_secondary);
    let command = text(&task.command)
        .size(12)
        .color(palette.text_secondary)
        .font(Font::MONOSPACE);

    row![
        container(name).width(Length::FillPortion(3)),
        container(owner).width(Length::FillPortion(2)),
        container(command).width(Length::FillPortion(4)),
        container(view_last_execution(task, palette)).width(Length::FillPortion(3)),
        container(view_actions(task, state, palette)).width(Length::Fixed(150.0)),
    ]
    .spacing(8)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

/// Relative start time plus duration, or a "never executed" tag.
fn view_last_execution<'a>(task: &'a Task, palette: &'a Palette) -> Element<'a, Message> {
    let Some(started) = task.last_started() else {
        return never_executed_tag(palette);
    };

    let mut cell = column![
        text(date_format::format_relative(started))
            .size(12)
            .color(palette.accent_light),
    ]
    .spacing(2);

    if let Some(seconds) = task
        .last_execution
        .as_ref()
        .and_then(|execution| execution.duration_seconds())
    {
        cell = cell.push(
            text(format!(
                "Duration: {}",
                date_format::format_duration_seconds(seconds)
            ))
            .size(11)
            .color(palette.text_muted),
        );
    }

    cell.into()
}

fn never_executed_tag(palette: &Palette) -> Element<'_, Message> {
    let bg = palette.card;
    let border_color = palette.border;
    container(text("Never executed").size(11).color(palette.text_muted))
        .padding(Padding::from([2, 8]))
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: iced::border::Radius::from(appearance::CORNER_RADIUS_SMALL),
            },
            ..Default::default()
        })
        .into()
}

fn view_actions<'a>(
    task: &'a Task,
    state: &TasksScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    // While this task is executing its run control shows a spinner and
    // emits nothing, which is the only guard against double-triggering.
    let run: Element<'a, Message> = if state.executing_task_id == Some(task.id.as_str()) {
        container(widget::spinner(state.spinner_frame, palette))
            .padding(Padding::from([6, 10]))
            .into()
    } else {
        widget::icon_button(Icon::Play, Some(Message::RunTask(task.clone())), palette)
    };

    let view_btn = widget::icon_button(Icon::Eye, Some(Message::ViewDetails(task.clone())), palette);
    let edit_btn =
        widget::icon_button(Icon::Pencil, Some(Message::OpenEditForm(task.clone())), palette);
    let delete_btn =
        widget::danger_icon_button(Icon::Trash2, Message::DeleteRequested(task.clone()), palette);

    row![run, view_btn, edit_btn, delete_btn]
        .spacing(2)
        .align_y(Alignment::Center)
        .into()
}

fn view_pagination<'a>(
    state: &TasksScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let pages = page_count(state.tasks.len());

    let prev = widget::icon_button(
        Icon::ChevronLeft,
        (state.page > 0).then_some(Message::PreviousPage),
        palette,
    );
    let next = widget::icon_button(
        Icon::ChevronRight,
        (state.page + 1 < pages).then_some(Message::NextPage),
        palette,
    );

    let summary = text(format!(
        "{} task{}",
        state.tasks.len(),
        if state.tasks.len() == 1 { "" } else { "s" }
    ))
    .size(12)
    .color(palette.text_muted);

    let position = text(format!("Page {} of {}", state.page + 1, pages))
        .size(12)
        .color(palette.text_secondary);

    row![summary, horizontal_space(), prev, position, next]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
