//! Users & roles screen.

use gateway_client::models::AccountStatus;
use gateway_client::{FilterCategory, count_where};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::app::pages::UsersPage;
use crate::ui::screens::{ScreenContext, list_layout, page_block};
use crate::ui::theme::{StatusStyle, ThemeExt};
use crate::ui::widgets::{
    SearchBarConfig, SummaryTile, render_empty_state, render_search_bar, render_summary_tiles,
};

pub fn render_users(f: &mut Frame, area: Rect, page: &mut UsersPage, ctx: ScreenContext) {
    let theme = ctx.theme;
    let [tiles_area, search_area, rest] = list_layout(area);
    let roles_height = page.roles.len() as u16 + 3;
    let [table_area, roles_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(roles_height)]).areas(rest);

    let records = &page.list.records;
    let tiles = [
        SummaryTile::new("Users", records.len(), theme.text()),
        SummaryTile::new(
            "Active",
            count_where(records, |u| u.status == AccountStatus::Active),
            theme.success(),
        ),
        SummaryTile::new(
            "Inactive",
            count_where(records, |u| u.status == AccountStatus::Inactive),
            theme.disabled(),
        ),
    ];
    render_summary_tiles(f, tiles_area, &tiles, theme);

    render_search_bar(
        f,
        search_area,
        SearchBarConfig {
            query: page.list.filter.query(),
            placeholder: "Search users by name or email...",
            filters: &[("Status", page.list.filter.category().label())],
            editing: ctx.searching,
            theme,
        },
    );

    let visible = page.list.visible();
    if visible.is_empty() {
        render_empty_state(f, table_area, ctx.title, "No users match the current filters", theme);
    } else {
        let rows: Vec<Row> = visible
            .iter()
            .map(|&i| {
                let u = &page.list.records[i];
                Row::new(vec![
                    Cell::from(u.name.as_str()),
                    Cell::from(u.email.as_str()),
                    Cell::from(u.role.label()),
                    Cell::from(Span::styled(u.status.label(), u.status.style_for(theme))),
                    Cell::from(u.last_login.as_str()),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(18),
                Constraint::Min(24),
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Length(20),
            ],
        )
        .header(
            Row::new(["Name", "Email", "Role", "Status", "Last Login"]).style(theme.table_header()),
        )
        .block(page_block(ctx.title, &ctx))
        .row_highlight_style(theme.highlight());
        f.render_stateful_widget(table, table_area, &mut page.list.table);
    }

    let role_rows: Vec<Row> = page
        .roles
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.role.label(), theme.info())),
                Cell::from(r.permissions.as_str()),
                Cell::from(format!("{} users", r.users)),
            ])
        })
        .collect();
    let roles = Table::new(
        role_rows,
        [Constraint::Length(10), Constraint::Min(20), Constraint::Length(10)],
    )
    .header(Row::new(["Role", "Permissions", "Members"]).style(theme.table_header()))
    .block(page_block("Roles", &ctx));
    f.render_widget(roles, roles_area);
}
