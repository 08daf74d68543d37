use super::Scroll;

#[test]
fn it_stays_at_top_when_content_fits() {
    let mut scroll = Scroll::default();
    scroll.set_lengths(5, 20);

    scroll.down();
    scroll.down_page();
    scroll.last();

    assert_eq!(scroll.position(), 0);
}

#[test]
fn it_clamps_to_the_last_page() {
    let mut scroll = Scroll::default();
    scroll.set_lengths(30, 10);

    scroll.down_page();
    assert_eq!(scroll.position(), 10);
    scroll.down_page();
    scroll.down_page();
    assert_eq!(scroll.position(), 20);

    scroll.up();
    assert_eq!(scroll.position(), 19);
    scroll.first();
    assert_eq!(scroll.position(), 0);
}

#[test]
fn it_pulls_position_back_when_content_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_lengths(30, 10);
    scroll.last();

    scroll.set_lengths(12, 10);

    assert_eq!(scroll.position(), 2);
}
