// SPDX-License-Identifier: MPL-2.0
//! Catalog screen rendering: search bar, card grid, pagination controls.

use super::{Message, State};
use crate::domain::Animal;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Contextual data needed to render the catalog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Directory the photo filenames resolve against.
    pub images_dir: &'a Path,
    /// Whether an administrator session is active (shows edit/delete).
    pub is_admin: bool,
}

/// Render the catalog screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let search = text_input(
        &ctx.i18n.tr("search-placeholder"),
        ctx.state.search_term(),
    )
    .on_input(Message::SearchChanged)
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let search_row = Container::new(search)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::SM);

    let content: Element<'_, Message> = if ctx.state.animals().is_empty() {
        Container::new(Text::new(ctx.i18n.tr("catalog-empty")).size(typography::TITLE_SM))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XL)
            .into()
    } else {
        let mut cards = Row::new().spacing(spacing::MD);
        for animal in ctx.state.page_animals() {
            cards = cards.push(build_card(&ctx, animal));
        }

        Container::new(cards)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::SM)
            .into()
    };

    let mut column = Column::new()
        .push(search_row)
        .push(content)
        .spacing(spacing::SM)
        .width(Length::Fill);

    // No animals, no pages: the empty message stands alone.
    if !ctx.state.animals().is_empty() {
        column = column.push(build_pagination(&ctx));
    }

    scrollable(column).width(Length::Fill).height(Length::Fill).into()
}

/// Build one catalog card: photo, identity lines, and action buttons.
fn build_card<'a>(ctx: &ViewContext<'a>, animal: &'a Animal) -> Element<'a, Message> {
    let photo_path = ctx.images_dir.join(&animal.photo);
    let photo: Element<'a, Message> = if !animal.photo.is_empty() && photo_path.exists() {
        image(photo_path)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_PHOTO_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into()
    } else {
        Container::new(Text::new(ctx.i18n.tr("card-photo-missing")).size(typography::BODY_SM))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_PHOTO_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    };

    let name = Text::new(
        ctx.i18n
            .tr_with_args("card-name", &[("name", animal.name.as_str())]),
    )
    .size(typography::TITLE_SM);
    let breed = Text::new(
        ctx.i18n
            .tr_with_args("card-breed", &[("breed", animal.breed.as_str())]),
    )
    .size(typography::BODY);
    let summary = Text::new(animal.summary.as_str()).size(typography::BODY);

    let visitor_actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(ctx.i18n.tr("card-details-button")))
                .on_press(Message::DetailsPressed(animal.id))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("card-adopt-button")))
                .on_press(Message::AdoptPressed(animal.id))
                .style(styles::button::success),
        );

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(photo)
        .push(name)
        .push(breed)
        .push(summary)
        .push(visitor_actions);

    if ctx.is_admin {
        let admin_actions = Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(ctx.i18n.tr("card-edit-button")))
                    .on_press(Message::EditPressed(animal.id))
                    .style(styles::button::warning),
            )
            .push(
                button(Text::new(ctx.i18n.tr("card-delete-button")))
                    .on_press(Message::DeletePressed(animal.id))
                    .style(styles::button::danger),
            );
        body = body.push(admin_actions);
    }

    Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

/// Build the pagination row: previous, one button per page, next.
fn build_pagination<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pagination = ctx.state.pagination();
    let total = ctx.state.animals().len();
    let page_count = pagination.page_count(total);

    let previous_label = Text::new(ctx.i18n.tr("pagination-previous"));
    let previous = if pagination.has_previous() {
        button(previous_label)
            .on_press(Message::PreviousPage)
            .style(styles::button::secondary)
    } else {
        button(previous_label).style(styles::button::disabled())
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(previous);

    for page in 1..=page_count {
        let page_button = button(Text::new(page.to_string()));
        let page_button = if page == pagination.page() {
            page_button.style(styles::button::selected)
        } else {
            page_button.style(styles::button::secondary)
        };
        row = row.push(page_button.on_press(Message::PageSelected(page)));
    }

    let next_label = Text::new(ctx.i18n.tr("pagination-next"));
    let next = if pagination.has_next(total) {
        button(next_label)
            .on_press(Message::NextPage)
            .style(styles::button::secondary)
    } else {
        button(next_label).style(styles::button::disabled())
    };
    row = row.push(next);

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::SM)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnimalId;
    use std::path::PathBuf;

    fn animal(id: u32, name: &str) -> Animal {
        Animal {
            id: AnimalId::new(id),
            name: name.to_string(),
            species: "Perro".to_string(),
            breed: "Labrador".to_string(),
            age: 2,
            summary: "Friendly".to_string(),
            detail: String::new(),
            photo: String::new(),
        }
    }

    #[test]
    fn catalog_view_renders_empty_state() {
        let i18n = I18n::default();
        let state = State::new(3);
        let images_dir = PathBuf::from("imagenes");
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            images_dir: &images_dir,
            is_admin: false,
        });
    }

    #[test]
    fn catalog_view_renders_cards_for_visitor_and_admin() {
        let i18n = I18n::default();
        let mut state = State::new(3);
        state.set_animals(vec![animal(1, "Rex"), animal(2, "Mimi")]);
        let images_dir = PathBuf::from("imagenes");

        let _visitor = view(ViewContext {
            i18n: &i18n,
            state: &state,
            images_dir: &images_dir,
            is_admin: false,
        });
        let _admin = view(ViewContext {
            i18n: &i18n,
            state: &state,
            images_dir: &images_dir,
            is_admin: true,
        });
    }
}
