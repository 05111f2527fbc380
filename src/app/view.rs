use super::messages::Message;
use super::state::{App, COVER_WIDTH_PX, SECTION_LABEL_SCALE};
use crate::extractor::{Section, SectionKind};
use crate::wordlist::{ALL_SECTIONS, SortMode};
use iced::alignment::Vertical;
use iced::widget::{Column, Row, button, column, container, image, pick_list, row, scrollable, text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let open_button = if self.book_loading {
            button("Open")
        } else {
            button("Open").on_press(Message::OpenPathRequested)
        };

        let open_controls = row![
            iced::widget::text_input("Path to an .epub file", &self.open_path_input)
                .on_input(Message::OpenPathInputChanged)
                .on_submit(Message::OpenPathRequested)
                .width(Length::FillPortion(3)),
            open_button,
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let status: Element<'_, Message> = if self.book_loading {
            text("Extracting sections...").into()
        } else if let Some(error) = &self.book_loading_error {
            text(error.clone()).into()
        } else if let Some(path) = &self.book.source_path {
            text(path.display().to_string()).into()
        } else {
            text("Pick a book").into()
        };

        let mut content: Column<'_, Message> = column![open_controls, status]
            .padding(16)
            .spacing(12)
            .height(Length::Fill);

        if !self.book.sections.is_empty() {
            content = content.push(self.filter_controls());

            let mut sections: Column<'_, Message> = Column::new().spacing(16);
            for section in self.filtered_sections() {
                sections = sections.push(self.section_view(section));
            }
            content = content.push(scrollable(sections.width(Length::Fill)).height(Length::Fill));
        }

        content.into()
    }

    fn filter_controls(&self) -> Element<'_, Message> {
        let mut filters: Row<'_, Message> = Row::new().spacing(8);
        filters = filters.push(
            button(text(ALL_SECTIONS))
                .on_press(Message::FilterSelected(ALL_SECTIONS.to_string())),
        );
        for section in &self.book.sections {
            filters = filters.push(
                button(text(section.label.clone()))
                    .on_press(Message::FilterSelected(section.label.clone())),
            );
        }
        scrollable(filters)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            ))
            .into()
    }

    fn section_view<'a>(&'a self, section: &'a Section) -> Element<'a, Message> {
        if section.kind == SectionKind::Cover {
            let cover: Element<'_, Message> = match &self.book.cover {
                Some(handle) => image(handle.clone()).width(COVER_WIDTH_PX).into(),
                None => text("Cover image unavailable").into(),
            };
            return column![
                text(section.label.clone())
                    .size(self.config.font_size as f32 * SECTION_LABEL_SCALE),
                cover
            ]
            .spacing(8)
            .into();
        }

        let label = section.label.clone();
        let sort_controls = row![
            text("Sort"),
            pick_list(
                &SortMode::ALL[..],
                Some(self.sort_choice_for(&section.label)),
                move |mode| Message::SortModeSelected {
                    label: label.clone(),
                    mode,
                },
            ),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        let mut words: Column<'_, Message> = Column::new().spacing(2);
        if let Some(entries) = self.wordlist.sorted.get(&section.label) {
            for entry in entries {
                let times = if entry.count == 1 { "time" } else { "times" };
                words = words.push(
                    text(format!(
                        "{} | appeared {} {}",
                        entry.word, entry.count, times
                    ))
                    .size(self.config.font_size as f32),
                );
            }
        }

        container(
            column![
                text(section.label.clone())
                    .size(self.config.font_size as f32 * SECTION_LABEL_SCALE),
                text(format!("{} total words", section.words.len())),
                sort_controls,
                words,
            ]
            .spacing(6),
        )
        .width(Length::Fill)
        .into()
    }
}
