//! Built-in story templates.

use super::{PageContent, PageKind, PageTemplate, Theme};

const fn cover(
    page_number: u32,
    title: &'static str,
    subtitle: &'static str,
    interpolate_name: bool,
    illustration: &'static str,
) -> PageTemplate {
    PageTemplate {
        page_number,
        kind: PageKind::Cover,
        content: PageContent {
            title: Some(title),
            subtitle: Some(subtitle),
            lead: None,
            tail: None,
            interpolate_name,
            illustration,
        },
    }
}

const fn story(
    page_number: u32,
    lead: &'static str,
    tail: &'static str,
    illustration: &'static str,
) -> PageTemplate {
    PageTemplate {
        page_number,
        kind: PageKind::Story,
        content: PageContent {
            title: None,
            subtitle: None,
            lead: Some(lead),
            tail: Some(tail),
            interpolate_name: true,
            illustration,
        },
    }
}

const fn ending(
    page_number: u32,
    lead: &'static str,
    tail: &'static str,
    illustration: &'static str,
) -> PageTemplate {
    PageTemplate {
        page_number,
        kind: PageKind::Ending,
        content: PageContent {
            title: None,
            subtitle: None,
            lead: Some(lead),
            tail: Some(tail),
            interpolate_name: true,
            illustration,
        },
    }
}

static BEDTIME_PAGES: [PageTemplate; 5] = [
    cover(1, "It's Bedtime", "A Special Story for", true, "cozy-bedroom-night"),
    story(
        2,
        "Hello",
        "! It's time to get ready for bed. Let's brush our teeth and put on cozy pajamas.",
        "child-getting-ready-for-bed",
    ),
    story(
        3,
        "Now",
        "climbs into the soft, warm bed. The moon is shining through the window, saying goodnight.",
        "child-in-bed-moonlight",
    ),
    story(
        4,
        "As",
        "closes their eyes, they dream of magical adventures with friendly animals and colorful rainbows.",
        "child-dreaming-magical-scene",
    ),
    ending(
        5,
        "Sweet dreams,",
        "! Sleep tight and have the most wonderful dreams. Good night!",
        "peaceful-sleeping-child-stars",
    ),
];

static PRINCESS_PAGES: [PageTemplate; 5] = [
    cover(1, "Princess", "and the Magic Kingdom", true, "castle-with-princess"),
    story(
        2,
        "Princess",
        "lives in a beautiful castle with towers that touch the clouds and gardens full of colorful flowers.",
        "princess-in-castle-garden",
    ),
    story(
        3,
        "One day, Princess",
        "discovers a magical door that leads to an enchanted forest filled with talking animals.",
        "princess-magical-forest-door",
    ),
    story(
        4,
        "The wise owl tells Princess",
        "about a hidden treasure that can bring happiness to the whole kingdom.",
        "princess-talking-to-wise-owl",
    ),
    ending(
        5,
        "Princess",
        "finds the treasure - it was kindness and friendship all along! The kingdom celebrates their brave princess.",
        "kingdom-celebration-princess",
    ),
];

static DINOSAUR_PAGES: [PageTemplate; 5] = [
    cover(1, "Explorer", "and the Land of Dinosaurs", true, "child-explorer-with-dinosaurs"),
    story(
        2,
        "Explorer",
        "puts on their adventure hat and grabs a magnifying glass to search for dinosaur fossils.",
        "child-with-explorer-gear",
    ),
    story(
        3,
        "Suddenly,",
        "discovers a time portal that takes them back millions of years to when dinosaurs roamed the Earth!",
        "time-portal-prehistoric-world",
    ),
    story(
        4,
        "Explorer",
        "meets friendly dinosaurs - a gentle Brontosaurus, a playful Triceratops, and a wise Pterodactyl.",
        "child-playing-with-friendly-dinosaurs",
    ),
    ending(
        5,
        "After an amazing day,",
        "returns home with wonderful memories and becomes the world's youngest dinosaur expert!",
        "child-back-home-with-dinosaur-books",
    ),
];

static SPACE_PAGES: [PageTemplate; 5] = [
    cover(1, "Captain", "Space Explorer", true, "child-astronaut-in-space"),
    story(
        2,
        "Captain",
        "puts on their shiny space suit and rocket boots, ready for an incredible journey to the stars!",
        "child-putting-on-space-suit",
    ),
    story(
        3,
        "The rocket ship blasts off! Captain",
        "zooms past colorful planets, dancing comets, and twinkling star clusters.",
        "rocket-ship-flying-past-planets",
    ),
    story(
        4,
        "On planet Zorb, Captain",
        "meets friendly alien creatures who love to play games and share cosmic cookies!",
        "child-playing-with-friendly-aliens",
    ),
    ending(
        5,
        "Captain",
        "returns to Earth as a hero, with new alien friends and amazing stories to tell everyone!",
        "child-back-on-earth-with-alien-friends",
    ),
];

static OCEAN_PAGES: [PageTemplate; 5] = [
    cover(1, "Mermaid", "Under the Sea", true, "child-mermaid-underwater"),
    story(
        2,
        "Mermaid",
        "discovers they can breathe underwater and swim with the beautiful fish in the coral reef.",
        "child-mermaid-swimming-with-fish",
    ),
    story(
        3,
        "A wise sea turtle shows Mermaid",
        "the way to an underwater palace made of pearls and seashells.",
        "mermaid-following-sea-turtle-to-palace",
    ),
    story(
        4,
        "In the palace, Mermaid",
        "meets the Ocean King who gifts them a magical conch shell that can call all sea creatures.",
        "mermaid-receiving-magical-conch-shell",
    ),
    ending(
        5,
        "Mermaid",
        "becomes the protector of the ocean, keeping all sea life safe and happy forever!",
        "mermaid-protecting-ocean-creatures",
    ),
];

pub(super) static THEMES: [Theme; 5] = [
    Theme {
        id: "1",
        title: "It's Bedtime",
        subtitle: "A Soothing Bedtime Story",
        pages: &BEDTIME_PAGES,
    },
    Theme {
        id: "2",
        title: "Little Princess Adventure",
        subtitle: "A Royal Tale",
        pages: &PRINCESS_PAGES,
    },
    Theme {
        id: "3",
        title: "Dinosaur Explorer",
        subtitle: "A Prehistoric Adventure",
        pages: &DINOSAUR_PAGES,
    },
    Theme {
        id: "4",
        title: "Space Adventure",
        subtitle: "A Cosmic Journey",
        pages: &SPACE_PAGES,
    },
    Theme {
        id: "5",
        title: "Ocean Adventure",
        subtitle: "Under the Sea",
        pages: &OCEAN_PAGES,
    },
];
