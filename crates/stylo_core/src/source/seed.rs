//! Hard-coded sample catalog used at design time and in demos.

use crate::model::item::CatalogItem;
use crate::source::catalog::CatalogSource;

const PLACEHOLDER_PARAGRAPH: &str = "Nivax Data";
const PLACEHOLDER_REPEATS: usize = 6;

const GROUP_DESCRIPTION: &str = "Group Description: Lorem ipsum dolor sit amet, consectetur \
adipiscing elit. Vivamus tempor scelerisque lorem in vehicula. Aliquam tincidunt, lacus ut \
sagittis tristique, turpis massa volutpat augue, eu rutrum ligula ante a ante";

struct SeedGroup {
    unique_id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    image_path: &'static str,
    items: &'static [SeedItem],
}

struct SeedItem {
    unique_id: &'static str,
    title: &'static str,
    image_path: &'static str,
    description: &'static str,
}

const SEED_GROUPS: &[SeedGroup] = &[
    SeedGroup {
        unique_id: "Group-1",
        title: "Dress Shirt Styles",
        subtitle: "Group Subtitle: 1",
        image_path: "Assets/DarkGray.png",
        items: &[
            SeedItem {
                unique_id: "Group-1-Item-1",
                title: "White, semi-spread, light to mid-weight Poplin/Pinpoint/Twill",
                image_path: "Assets/HubPage/HubPage1.png",
                description: "Quick, think of a white dress shirt.  Yahtzee.  There’s the #1 shirt \
we should all have in our closet.  The collar does not button down on these, and the fabric is a \
mid to lightweight (we’ll get to the thicker oxford cloth soon).  Some call these oxfords even \
though that’s not quite right.  It’s a shirt that’ll look equally as good with a suit as under a \
v-neck with jeans.  It’s crisp, it’s clean, and you want a collar with enough beef  to look \
substantial.  Use some wurkin’ stiffs to keep it framing your face when tieless.  Melt your brain \
with the differences between poplin, pinpoint, & twill here, here, and here (scroll down a bit on \
that last one).",
            },
            SeedItem {
                unique_id: "Group-1-Item-2",
                title: "Light Blue, semi-spread, light to mid-weight Poplin/Pinpoint/Twill",
                image_path: "Assets/HubPage/HubPage2.png",
                description: "Pretty much the same thing as the white dress shirt at #1, only in a \
real light blue color.  Not royal blue, not kinda light blue with grey buttons, light blue with \
standard off-white/bone colored buttons.  Slightly less formal than white, but still able to be \
dressed way up.  The BR shirt above doesn’t come in neck-and-sleeve measurements, but it can get \
cheap when on sale.  It’s also been quite durable on this end, after a ton of beatings in the \
washer & dryer.",
            },
            SeedItem {
                unique_id: "Group-1-Item-3",
                title: "White, mid-weight to heavy-weight Oxford Cloth Button Down",
                image_path: "Assets/HubPage/HubPage3.png",
                description: "The OCBD.  Which surprisingly, wasn’t a member of the WuTang clan.  \
OCBD = Oxford Cloth Button Down.  And the “button down” part refers to the collar, not the fact \
that you button the shirt in front.  The term for that would be “button up” (even, if like me, \
you start at the top and button down.  Let’s move on.)  Is it a “dress” shirt?  That can really \
depend on how thick the fabric is.  If it’s like the J. Crew Factory above, or maybe the options \
from Old Navy, Bonobos or LEC, the thickness and rumpled-ness (not a word) of the cloth will make \
it hard to dress up.  But lighter, pressed OCBDs can pull some duty at the office.  A workhorse \
for layering.  Think grey jeans with a blue cotton blazer.",
            },
            SeedItem {
                unique_id: "Group-1-Item-4",
                title: "White base, blue windowpane / tattersall, non-button-down",
                image_path: "Assets/HubPage/HubPage4.png",
                description: "Lots of white and blue right?  Well, yes.  An orange and green check \
just won’t go with as much stuff in your closet.  Meanwhile, a windowpane or tattersall is just \
different enough from the usual striped shirts most guys default to.  When under a jacket of some \
kind, they’ll give your look a bit of depth.  And unlike gingham (we’re getting there) they’ve \
got plenty of white which is more business ready.  When it comes to the office, for paterns, \
Tic-Tac-Toe > Checkers.  And for the size of the squares, the ideal size is between a pencil \
eraser and a quarter.",
            },
            SeedItem {
                unique_id: "Group-1-Item-5",
                title: "The Bold Gingham non-button-down",
                image_path: "Assets/HubPage/HubPage5.png",
                description: "Color is up to you.  Black and white obviously offers the most \
contrast, but deep blue, red, even purple can deliver.  It’s a dressed up version of a dressed \
down pattern.",
            },
            SeedItem {
                unique_id: "Group-1-Item-6",
                title: "White base, thin stripe non-button-down",
                image_path: "Assets/HubPage/HubPage6.png",
                description: "The stripes on these are thin enough that white base is dominant, but \
the stripes add a bit of depth and maybe some more color.  Thicker striped ties look just fine on \
top.  Just keep the thickness of the patterns far enough apart.  Keep your stripes slim and you \
can even take some color risks, like the tan stripe on the pictured cotton-blend, cheap Alfani \
Red.",
            },
        ],
    },
    SeedGroup {
        unique_id: "Group-2",
        title: "t-Shirt Styles",
        subtitle: "Group Subtitle: 2",
        image_path: "Assets/LightGray.png",
        items: &[
            SeedItem {
                unique_id: "Group-2-Item-1",
                title: "Last Exit To Nowhere",
                image_path: "Assets/HubPage/HubPage7.png",
                description: "You didn't have to spend your childhood Betamaxed out on TRON for \
certain classic movies to become a part of your life. Celebrate your celluloid intimacy like a \
true connoisseur with a Last Exit to Nowhere T-shirt.These high-quality, short-sleeve crew necks \
pull logos of iconic companies and places from seriously canonic flicks, offering a wink to \
fellow devotees without trumpeting embarrassing fanboydom to people who have no idea just how \
well a rug can tie a room",
            },
            SeedItem {
                unique_id: "Group-2-Item-2",
                title: "Hendrix Shirts",
                image_path: "Assets/HubPage/HubPage8.png",
                description: "A collaboration between Hendrix's sister and Altamont cofounder \
Andrew Reynolds, the line's emblazoned with vintage backstage art from the man who once famously \
observed my other-worldly guitar skills can make up for my unintelligible singing. Each garment \
begins as a soft, 100% cotton, ring-spun T-shirt, then gets printed with Jimi-created designs, \
like the Rooster (a purple haze'd cock) and the Bride (a beautiful woman stretched out on the \
white field of your distended belly).",
            },
            SeedItem {
                unique_id: "Group-2-Item-3",
                title: "Beard And Bangs",
                image_path: "Assets/HubPage/HubPage9.png",
                description: "Many graphic T-shirts are inspired by drugs you've rarely taken -- so \
why not change things up with shirts inspired by history you've scarcely read? Flaunt ye olde \
school, with Beard and Bangs. Handmade in Brooklyn, BB's 100% cotton shirts are designed along \
historical themes, with the current collection taken from arcane postage stamps and a line from a \
Dylan song (Tombstone Blues: confounding fans with oblique references since 1965).",
            },
            SeedItem {
                unique_id: "Group-2-Item-4",
                title: "LOLA",
                image_path: "Assets/HubPage/HubPage10.png",
                description: "Like a tiny island nation that can only export phosphates, many \
smaller designers exhibit a range that's severely limited by their capability. For a small \
company that's going in so many directions that it no longer knows where it is, check out LOLA. \
Based out of New York, LOLA's theme is themelessness: A happily disconnected line of polos, \
hoodies and T-shirts influenced by such iconic touchstones as seafaring, gangsta rap and youth \
sports.",
            },
            SeedItem {
                unique_id: "Group-2-Item-5",
                title: "Hard Rider NYC",
                image_path: "Assets/HubPage/HubPage11.png",
                description: "Tattoos are man's oldest and boldest expression of creativity. \
Unfortunately, they're also man's oldest and boldest source of hepatitis C. Exercise that same \
expressiveness on your clothes with Hard Rider NYC.",
            },
            SeedItem {
                unique_id: "Group-2-Item-6",
                title: "Zachary Prell",
                image_path: "Assets/HubPage/HubPage12.png",
                description: "It's bad enough that you're forced to wear button downs to work, but \
adding insult to injury are their annoyingly unnecessary structural defects -- it's like sitting \
in an electric chair that also smells bad. For an obsessively achieved solution, try Zachary \
Prell. ZP was founded by an ex-Wall Streeter who spent three years creating his ultimate office \
shirt (including one year scouring mills around the world for fabric soft enough for hard-working \
men). The result is a shirt that’s free of the odd button spacing, bunching, and other \
imperfections that can make wearing even a high-end label a nagging hell.",
            },
        ],
    },
];

/// Placeholder body text shared by every seeded item.
pub fn item_content() -> String {
    let mut content = format!("Item Content: {PLACEHOLDER_PARAGRAPH}");
    for _ in 0..PLACEHOLDER_REPEATS {
        content.push_str("\n\n");
        content.push_str(PLACEHOLDER_PARAGRAPH);
    }
    content
}

/// Appends the sample groups and items to `source`.
pub fn populate(source: &mut CatalogSource) {
    let content = item_content();
    for seed_group in SEED_GROUPS {
        let mut group = source
            .new_group(seed_group.unique_id, seed_group.title)
            .with_subtitle(seed_group.subtitle)
            .with_image_path(seed_group.image_path)
            .with_description(GROUP_DESCRIPTION);
        for seed_item in seed_group.items {
            let item = CatalogItem::new(seed_item.unique_id, seed_item.title)
                .with_image_path(seed_item.image_path)
                .with_description(seed_item.description)
                .with_content(content.as_str())
                .in_group(seed_group.unique_id);
            group.push(item.into_ref());
        }
        source.add_group(group);
    }
}

#[cfg(test)]
mod tests {
    use super::{item_content, SEED_GROUPS};
    use crate::config::CatalogOptions;
    use crate::source::catalog::CatalogSource;

    #[test]
    fn item_content_repeats_placeholder_paragraphs() {
        let content = item_content();
        assert!(content.starts_with("Item Content: Nivax Data\n\n"));
        assert_eq!(content.matches("Nivax Data").count(), 7);
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn seeded_items_carry_full_descriptions() {
        let source = CatalogSource::seeded(CatalogOptions::default()).expect("default options");
        let item = source
            .get_item("Group-1-Item-5")
            .expect("unique lookup")
            .expect("item exists");
        assert_eq!(
            item.borrow().entity().description(),
            "Color is up to you.  Black and white obviously offers the most contrast, but deep \
blue, red, even purple can deliver.  It’s a dressed up version of a dressed down pattern."
        );

        let longest = SEED_GROUPS
            .iter()
            .flat_map(|group| group.items)
            .map(|item| item.description.len())
            .max()
            .unwrap_or(0);
        assert!(longest > 600);
    }
}
