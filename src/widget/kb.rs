//! Knowledge Base Widget: folder tree, tag rail, and article list.
//!
//! The folder pane sits on the left; Up/Down move the tree cursor and
//! Enter activates a folder (the top "All articles" row is the root
//! sentinel that shows everything). Typing edits the search box;
//! Left/Right walk the tag rail and Tab toggles the tag under the
//! cursor.

use super::text_input::{TextInput, TextInputConfig};
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::data::{Article, KbDoc, ROOT_FOLDER_ID};
use crate::layout::Rect;
use crate::query::{collect_tags, flatten_tree, ArticleQuery, Filter, FolderTree};
use std::time::Duration;

const TREE_PANE_WIDTH: u16 = 24;

/// Configuration for the knowledge-base widget.
#[derive(Debug, Clone)]
pub struct KbConfig {
    /// Page background.
    pub bg: Rgb,
    /// Primary text color.
    pub fg: Rgb,
    /// Muted text (previews, dates).
    pub muted_fg: Rgb,
    /// Accent color (active folder, selected tags).
    pub accent: Rgb,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(18, 22, 28),
            fg: Rgb::new(220, 220, 220),
            muted_fg: Rgb::new(135, 145, 155),
            accent: Rgb::new(250, 200, 90),
        }
    }
}

/// One selectable row of the folder pane.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PaneRow {
    folder_id: String,
    label: String,
    depth: u16,
}

/// A knowledge-base browser.
#[derive(Debug)]
pub struct KbWidget {
    doc: KbDoc,
    pane_rows: Vec<PaneRow>,
    tags: Vec<String>,
    filter: Filter,
    tag_cursor: usize,
    tree_cursor: usize,
    active_folder: String,
    search: TextInput,
    bounds: Rect,
    config: KbConfig,
    dirty: bool,
}

impl KbWidget {
    /// Create the widget over a loaded knowledge-base document.
    pub fn new(bounds: Rect, doc: KbDoc) -> Self {
        let tree = FolderTree::build(&doc.folders);
        let mut pane_rows = vec![PaneRow {
            folder_id: ROOT_FOLDER_ID.to_string(),
            label: String::from("All articles"),
            depth: 0,
        }];
        pane_rows.extend(flatten_tree(&tree).iter().map(|row| PaneRow {
            folder_id: row.folder.id.clone(),
            label: row.folder.name.clone(),
            depth: row.depth,
        }));
        let tags = collect_tags(doc.articles.iter().map(|a| a.tags.as_slice()));
        let search = TextInput::with_config(
            Rect::new(bounds.x + TREE_PANE_WIDTH, bounds.y, bounds.width.saturating_sub(TREE_PANE_WIDTH), 1),
            TextInputConfig {
                placeholder: String::from("Search articles"),
                ..TextInputConfig::default()
            },
        );
        Self {
            doc,
            pane_rows,
            tags,
            filter: Filter::default(),
            tag_cursor: 0,
            tree_cursor: 0,
            active_folder: ROOT_FOLDER_ID.to_string(),
            search,
            bounds,
            config: KbConfig::default(),
            dirty: true,
        }
    }

    /// Articles passing the folder scope and filter, in document order.
    pub fn visible_articles(&self) -> Vec<&Article> {
        let query = ArticleQuery {
            folder_id: &self.active_folder,
            filter: &self.filter,
        };
        self.doc.articles.iter().filter(|a| query.passes(a)).collect()
    }

    /// The id of the active folder.
    pub fn active_folder(&self) -> &str {
        &self.active_folder
    }

    fn activate_cursor_row(&mut self) {
        if let Some(row) = self.pane_rows.get(self.tree_cursor) {
            self.active_folder = row.folder_id.clone();
            self.dirty = true;
        }
    }

    fn sync_filter(&mut self) {
        self.filter.query = self.search.content().trim().to_string();
        self.dirty = true;
    }

    fn render_tree(&self, buffer: &mut Buffer, pane: Rect) {
        for (row_index, row) in self.pane_rows.iter().enumerate().take(pane.height as usize) {
            #[allow(clippy::cast_possible_truncation)]
            let y = pane.y + row_index as u16;
            let active = row.folder_id == self.active_folder;
            let under_cursor = row_index == self.tree_cursor;
            let marker = if under_cursor { "▸" } else { " " };
            let indent = " ".repeat(row.depth as usize * 2);
            let line = format!("{marker}{indent}{}", row.label);
            let fg = if active { self.config.accent } else { self.config.fg };
            let modifiers = if active { Modifiers::BOLD } else { Modifiers::empty() };
            buffer.draw_str_with(pane.x, y, &line, fg, self.config.bg, modifiers);
        }
    }

    fn render_tag_rail(&self, buffer: &mut Buffer, x: u16, y: u16, right: u16) {
        let mut cursor_x = x;
        for (i, tag) in self.tags.iter().enumerate() {
            let active = self.filter.selected_tags.contains(tag);
            let mut modifiers = Modifiers::empty();
            if active {
                modifiers |= Modifiers::REVERSED;
            }
            if i == self.tag_cursor {
                modifiers |= Modifiers::UNDERLINE;
            }
            let fg = if active { self.config.accent } else { self.config.muted_fg };
            let label = format!("[{tag}]");
            cursor_x += buffer.draw_str_with(cursor_x, y, &label, fg, self.config.bg, modifiers) + 1;
            if cursor_x >= right {
                break;
            }
        }
    }

    fn render_articles(&self, buffer: &mut Buffer, area: Rect) {
        let articles = self.visible_articles();
        let folder_name = if self.active_folder == ROOT_FOLDER_ID {
            "All articles"
        } else {
            self.doc.folder_name(&self.active_folder)
        };
        let header = format!("{folder_name} — {} articles", articles.len());
        buffer.draw_str(area.x, area.y, &header, self.config.muted_fg, self.config.bg);

        if articles.is_empty() {
            buffer.draw_str(
                area.x,
                area.y + 2,
                "No articles here",
                self.config.muted_fg,
                self.config.bg,
            );
            return;
        }

        let mut y = area.y + 2;
        for article in articles {
            if y + 1 >= area.bottom() {
                break;
            }
            buffer.draw_str_with(area.x, y, &article.title, self.config.fg, self.config.bg, Modifiers::BOLD);
            let meta = if article.tags.is_empty() {
                format!("Updated {}", article.updated_at)
            } else {
                format!("Updated {} · {}", article.updated_at, article.tags.join(", "))
            };
            buffer.draw_str(area.x, y + 1, &meta, self.config.muted_fg, self.config.bg);
            if !article.preview.is_empty() && y + 2 < area.bottom() {
                buffer.draw_str_with(
                    area.x,
                    y + 2,
                    &article.preview,
                    self.config.muted_fg,
                    self.config.bg,
                    Modifiers::DIM,
                );
                y += 1;
            }
            y += 3;
        }
    }
}

impl Widget for KbWidget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.search.set_bounds(Rect::new(
            bounds.x + TREE_PANE_WIDTH,
            bounds.y,
            bounds.width.saturating_sub(TREE_PANE_WIDTH),
            1,
        ));
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(self.config.bg));
        let (tree_pane, main) = self.bounds.split_horizontal(TREE_PANE_WIDTH);
        self.render_tree(buffer, tree_pane);
        self.search.render(buffer);
        self.render_tag_rail(buffer, main.x, main.y + 1, main.right());
        let articles_area = Rect::new(
            main.x,
            main.y + 3,
            main.width,
            main.height.saturating_sub(3),
        );
        self.render_articles(buffer, articles_area);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key { code, modifiers } = event {
            match code {
                KeyCode::Up => {
                    self.tree_cursor = self.tree_cursor.saturating_sub(1);
                    self.dirty = true;
                    return true;
                }
                KeyCode::Down => {
                    if self.tree_cursor + 1 < self.pane_rows.len() {
                        self.tree_cursor += 1;
                    }
                    self.dirty = true;
                    return true;
                }
                KeyCode::Enter => {
                    self.activate_cursor_row();
                    return true;
                }
                KeyCode::Left => {
                    self.tag_cursor = self.tag_cursor.saturating_sub(1);
                    self.dirty = true;
                    return true;
                }
                KeyCode::Right => {
                    if self.tag_cursor + 1 < self.tags.len() {
                        self.tag_cursor += 1;
                    }
                    self.dirty = true;
                    return true;
                }
                KeyCode::Tab => {
                    if let Some(tag) = self.tags.get(self.tag_cursor).cloned() {
                        self.filter.toggle_tag(&tag);
                        self.dirty = true;
                    }
                    return true;
                }
                KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
                    if !modifiers.control && !modifiers.alt =>
                {
                    if self.search.handle_input(event) {
                        self.sync_filter();
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    fn tick(&mut self, now: Duration) {
        self.search.tick(now);
        if self.search.needs_redraw() {
            self.dirty = true;
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Folder;

    fn doc() -> KbDoc {
        KbDoc {
            folders: vec![
                Folder {
                    id: "f1".into(),
                    name: "Guides".into(),
                    parent_id: None,
                },
                Folder {
                    id: "f2".into(),
                    name: "Setup".into(),
                    parent_id: Some("f1".into()),
                },
            ],
            articles: vec![
                Article {
                    id: "a1".into(),
                    folder_id: "f1".into(),
                    title: "First steps".into(),
                    tags: vec!["intro".into()],
                    preview: "Getting going.".into(),
                    updated_at: "2024-03-05".into(),
                    content_html: String::new(),
                },
                Article {
                    id: "a2".into(),
                    folder_id: "f2".into(),
                    title: "Install notes".into(),
                    tags: vec!["intro".into(), "tooling".into()],
                    preview: String::new(),
                    updated_at: "2024-04-01".into(),
                    content_html: String::new(),
                },
            ],
        }
    }

    fn widget() -> KbWidget {
        KbWidget::new(Rect::new(0, 0, 80, 24), doc())
    }

    #[test]
    fn test_root_shows_everything() {
        let kb = widget();
        assert_eq!(kb.active_folder(), ROOT_FOLDER_ID);
        assert_eq!(kb.visible_articles().len(), 2);
    }

    #[test]
    fn test_folder_activation_scopes_articles() {
        let mut kb = widget();
        // pane rows: All articles, Guides, Setup
        kb.handle_input(&InputEvent::key(KeyCode::Down));
        kb.handle_input(&InputEvent::key(KeyCode::Down));
        kb.handle_input(&InputEvent::key(KeyCode::Enter));
        assert_eq!(kb.active_folder(), "f2");
        let titles: Vec<&str> = kb.visible_articles().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Install notes"]);
    }

    #[test]
    fn test_search_filters_titles() {
        let mut kb = widget();
        for c in "install".chars() {
            kb.handle_input(&InputEvent::key(KeyCode::Char(c)));
        }
        let titles: Vec<&str> = kb.visible_articles().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Install notes"]);
    }

    #[test]
    fn test_tag_toggle_requires_all_selected() {
        let mut kb = widget();
        // tags sorted: intro, tooling
        kb.handle_input(&InputEvent::key(KeyCode::Right));
        kb.handle_input(&InputEvent::key(KeyCode::Tab));
        assert_eq!(kb.visible_articles().len(), 1);
        assert_eq!(kb.visible_articles()[0].id, "a2");
    }

    #[test]
    fn test_render_tree_and_articles() {
        let kb = widget();
        let mut buffer = Buffer::new(80, 24);
        kb.render(&mut buffer);
        let screen: Vec<String> = (0..24).map(|y| buffer.row_text(y)).collect();
        assert!(screen.iter().any(|row| row.contains("All articles")));
        assert!(screen.iter().any(|row| row.contains("Guides")));
        assert!(screen.iter().any(|row| row.contains("  Setup")));
        assert!(screen.iter().any(|row| row.contains("First steps")));
        assert!(screen.iter().any(|row| row.contains("Updated 2024-03-05")));
    }

    #[test]
    fn test_tree_cursor_clamps() {
        let mut kb = widget();
        kb.handle_input(&InputEvent::key(KeyCode::Up));
        for _ in 0..10 {
            kb.handle_input(&InputEvent::key(KeyCode::Down));
        }
        kb.handle_input(&InputEvent::key(KeyCode::Enter));
        assert_eq!(kb.active_folder(), "f2");
    }
}
