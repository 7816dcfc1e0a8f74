use crate::world::Biome;
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The points of interest that can be placed on a hex, grouped by biome.
///
/// List order matters: features are chosen by drawing an index into a
/// biome's list, so reordering a list changes which feature a given seed
/// produces. A biome with no entry (or an empty list) simply never gets a
/// feature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureCatalog {
    features: HashMap<Biome, Vec<String>, FnvBuildHasher>,
}

impl FeatureCatalog {
    /// The catalog used by full-map generation
    pub fn world() -> Self {
        Self::from_lists(&[
            (Biome::Forest, WORLD_FOREST),
            (Biome::Plains, WORLD_PLAINS),
            (Biome::Mountains, WORLD_MOUNTAINS),
            (Biome::Hills, WORLD_HILLS),
            (Biome::Swamp, WORLD_SWAMP),
            (Biome::Desert, WORLD_DESERT),
            (Biome::Ocean, WORLD_OCEAN),
            (Biome::River, WORLD_RIVER),
        ])
    }

    /// The (smaller) catalog used when hexes are generated one at a time
    /// during exploration
    pub fn exploration() -> Self {
        Self::from_lists(&[
            (Biome::Forest, EXPLORATION_FOREST),
            (Biome::Plains, EXPLORATION_PLAINS),
            (Biome::Mountains, EXPLORATION_MOUNTAINS),
            (Biome::Hills, EXPLORATION_HILLS),
            (Biome::Swamp, EXPLORATION_SWAMP),
            (Biome::Desert, EXPLORATION_DESERT),
            (Biome::Ocean, EXPLORATION_OCEAN),
            (Biome::River, EXPLORATION_RIVER),
        ])
    }

    fn from_lists(lists: &[(Biome, &[&str])]) -> Self {
        let mut catalog = Self::default();
        for (biome, features) in lists {
            catalog.set(*biome, features.iter().map(|f| f.to_string()));
        }
        catalog
    }

    /// Replace the feature list for a biome
    pub fn set(
        &mut self,
        biome: Biome,
        features: impl IntoIterator<Item = String>,
    ) {
        self.features.insert(biome, features.into_iter().collect());
    }

    /// Get the ordered feature list for a biome. Empty if the catalog has
    /// nothing for it.
    pub fn features(&self, biome: Biome) -> &[String] {
        self.features
            .get(&biome)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

const WORLD_FOREST: &[&str] = &[
    "Ancient Grove", "Logging Camp", "Druid Circle", "Hidden Shrine",
    "Bandit Camp", "Hunter's Lodge", "Ent Burial Site", "Forgotten Ranger Post",
    "Mushroom Ring", "Wild Orchard", "Fairy Circle", "Abandoned Cabin",
    "Elf Encampment", "Forest Beacon", "Thorn Thicket", "Animal Den",
    "Overgrown Path", "Singing Stones", "Moonlit Glade", "Treefolk Settlement",
    "Witch Circle", "Squirrelfolk Village", "Canopy Watchpost",
    "Hollow Tree Refuge", "Ranger's Trapline", "Spirit Grove", "Misty Clearing",
    "Hidden Pool", "Woodland Grave", "Treehouse Lookout", "Dryad’s Hollow",
    "Forest Maze", "Secret Garden", "Camouflaged Tent", "Root-Cursed Ring",
    "Crashed Skycraft", "Beast Pit", "Elven Waystone", "Hanging Moss Bridge",
    "Bloodthistle Patch", "Druidic Arch", "Logging Rails", "Night Bloom Hollow",
    "Chittering Hollow", "Briar Gate", "Vine-Strangled Statue",
    "Ancient War Camp", "Woodland Sanctuary", "Direwolf Den", "Fungus Grotto",
];

const WORLD_PLAINS: &[&str] = &[
    "Village", "Trading Post", "Windmill", "Stone Circle", "Battlefield",
    "Crossroads Inn", "Grain Silo", "Horse Ranch", "Ranger’s Camp",
    "Ruined Watchpost", "Fallow Field", "Wandering Caravan", "Hilltop Altar",
    "Nomad Stones", "Weathered Statue", "Open-Air Market", "Sunken Barrow",
    "Traveling Circus", "Abandoned Tent", "Militia Training Grounds",
    "Field of Bones", "Plains Stonehenge", "Hay Bale Maze", "Plague Marker",
    "Giant Badger Burrow", "Messenger’s Crossroads", "Comet Impact Crater",
    "Shepherd Encampment", "Rolling Boulders", "Lone Oak Tree", "Tilled Patch",
    "Sacrificial Stones", "Bannered Hill", "Trampled Battleground",
    "Fey Circle", "Weather Station", "Scarecrow Sentinel", "Buffalo Wallows",
    "Hilltop Cairn", "Dust Devil Path", "Corn Effigy", "Migrant Nest",
    "Wagoneer’s Stop", "Wind Shrine", "Buried Time Capsule", "Flower Field",
    "Shimmering Mirage", "Old Farmstead", "Ghost Herd Tracks",
];

const WORLD_MOUNTAINS: &[&str] = &[
    "Mine", "Dwarven Outpost", "Cave System", "Observatory", "Dragon Lair",
    "Ancient Fortress", "Avalanche Path", "Goat Trail", "Glacier Crack",
    "Monastery in the Peaks", "Collapsed Tunnel", "Meteor Crater",
    "Hermit’s Peak", "Frozen Waterfall", "Crystal Cavern", "Abandoned Lift",
    "Mountain Shrine", "Troll Bridge", "Sacred Spire", "Thundering Pass",
    "Eagle’s Eyrie", "Smuggler Hideout", "Snow Leopard Ledge",
    "Highlander Camp", "Lava Vent", "Seismic Altar", "Frost Giant Camp",
    "Ridge Camp", "Scree Field", "Runestone Slab", "Haunted Pass",
    "Storm Watch Tower", "Permafrost Crypt", "Stalactite Forest",
    "Lonely Cabin", "Miners’ Graveyard", "Orc Warcamp", "Fog Chasm",
    "Magma Chamber", "Glinting Cliffside", "Collapsed Rope Bridge",
    "Beacon Tower", "Goat Bones Pile", "Abandoned Siege Engine",
    "Falling Rock Zone", "Thunderbird Nest", "Deep Echo Cavern",
    "Hidden Dwarf Vault", "Ice Spider Lair",
];

const WORLD_HILLS: &[&str] = &[
    "Watchtower", "Shepherd's Hut", "Burial Mound", "Old Ruins",
    "Hillside Village", "Stone Quarry", "Smuggler's Tunnel", "Rolling Cairns",
    "Wind-Cut Pass", "Hilltop Shrine", "Scout Post", "Overgrown Barrows",
    "Thistle Patch", "Crumbling Mill", "Stone Circles", "Bandit Lookout",
    "Wild Horse Herd", "Traveler's Shrine", "Witch's Circle", "Mossy Caves",
    "Singing Ridge", "Lichen Gully", "Cave of Whispers", "Rockslide Path",
    "Lone Pine Peak", "Hermit's Nook", "Goatherd Camp", "Hidden Spring",
    "Storm-Touched Hill", "Old Battlefield Rise", "Lightning-Struck Tree",
    "Eroded Crossroads", "Griffon Roost", "Scout Firepit", "Ruin-Filled Ravine",
    "Buried Stones", "Wind Chime Ridge", "Slumbering Titan Face",
    "Windswept Tumulus", "Forgotten Farmhouse", "Hidden Den", "Runed Stones",
    "Wildflower Crest", "Ash-Covered Hill", "Old Signpost", "Giant Molehill",
    "Thief’s Shortcut", "Goblin Lookout", "Moonrise Perch",
];

const WORLD_SWAMP: &[&str] = &[
    "Witch's Hut", "Alchemist Garden", "Sunken Temple", "Will O' Wisp Grove",
    "Bog Iron Mine", "Floating Dock", "Leech Pond", "Sunken Library",
    "Ghoul Tree", "Fungal Bog", "Croaking Circle", "Rotting Cabin", "Reed Maze",
    "Alligator Nest", "Fog Totem", "Moss-Covered Altar", "Sinking Statue",
    "Vine-Choked Tomb", "Poison Lily Grove", "Toadfolk Village",
    "Brine Bubble Pool", "Ghost Light Crossing", "Witchweed Clearing",
    "Mud-Stained Alchemy Cart", "Ooze Pool", "Spore-Storm Zone",
    "Snapping Turtle Mound", "Bog Cauldron", "Whimpering Marsh", "Decay Shrine",
    "Spirit Lantern Grove", "Fungus Tower", "Mire Sentinel",
    "Dragonfly Swarm Nest", "Hag’s Larder", "Sorrow Roots", "Gasping Fen",
    "Swallowed Bridge", "Crabfolk Trapline", "Pestilent Spring", "Wading Stone",
    "Sedgefield Grave", "Smothered Path", "Ghost Croft", "Cursed Hammock",
    "Quagmire Bones", "Mosquito Mote", "Bloodvine Patch", "Swampfire Circle",
];

const WORLD_DESERT: &[&str] = &[
    "Oasis", "Nomad Camp", "Buried Ruins", "Salt Mine", "Mirage Pool",
    "Sandstone Cliffs", "Camel Graveyard", "Wind-Cut Canyon", "Scorpion Nest",
    "Crumbling Watchtower", "Sand Trap Dunes", "Starfall Crater", "Glass Field",
    "Ancient Aquifer", "Whispering Monolith", "Sun-Bleached Shrine",
    "Abandoned Caravansary", "Silt Basin", "Burned Caravan", "Sandstorm Altar",
    "Snake Pit", "Dune Sea Totem", "Sunken Vault", "Trader/s Crossroads",
    "Sandwyrm Tunnel", "Ghost Caravan Route", "Wandering Bones",
    "Salt Flat Encampment", "Cactus Grove", "Beetle Shell Pit", "Sun Idol",
    "Cave of Echoes", "Deserted Bazaar", "Dry River Gully", "Golden Dunes",
    "Hissing Vents", "Lost Camel Bell", "Trickster Shrine", "Dust Maw",
    "Razor Ridge", "Nomad Oracle Tent", "Heat Mirage Idol",
    "Crumbling Stone Arch", "Buried Time Temple", "Windmill Blades",
    "Forgotten Route Signpost", "Ritual Pit", "Desert Glass Tower",
    "Wanderer’s Bones",
];

const WORLD_OCEAN: &[&str] = &[
    "Shipwreck", "Coral Reef", "Sea Cave", "Lighthouse", "Fishing Village",
    "Hidden Cove", "Kelp Forest", "Siren Rocks", "Whale Bones",
    "Sunken Observatory", "Smuggler’s Shipwreck", "Pearl Diver’s Dock",
    "Tide Pool Maze", "Shimmering Whirlpool", "Crab Shell Isles",
    "Singing Coral Pillar", "Lost Sail Shrine", "Drowned Library",
    "Seashell Totem", "Sunken Galleon", "Giant Clam Nest", "Saltwater Spring",
    "Barnacle Arch", "Leviathan Bones", "Drifting Cargo", "Eel Trench",
    "Merfolk Ruins", "Bioluminescent Shelf", "Coral Throne",
    "Shark Breeding Grounds", "Abandoned Buoy Post", "Sea Witch Altar",
    "Foam-Covered Cross", "Deep Current Gateway", "Dolphin Nesting Ground",
    "Jellyfish Bloom", "Floating Algae Patch", "Crashing Tide Column",
    "Ghost Sailor Camp", "Squid Nesting Grounds", "Hidden Harpoon Cache",
    "Driftwood Isle", "Sunken Bell Tower", "Coral Tunnel", "Mariner’s Grave",
    "Ocean Vent", "Sail Fragment Ring", "Stormwreck Archipelago",
    "Gull-Ridden Rocks",
];

const WORLD_RIVER: &[&str] = &[
    "Bridge", "Ferry Crossing", "Watermill", "Fishing Spot", "River Port",
    "Sacred Spring", "Log Raft Camp", "Flooded Shrine", "Rapids Watch",
    "Eel Trap Weir", "River Troll Nest", "Old Dam Ruins", "Mist Dock",
    "Whispering Brook", "Floating Market", "Fishbone Weir",
    "Dry Season Crossing", "Drifted Totem", "Water Sprite Hollow",
    "Floodplain Graveyard", "Silt Nest", "Wade Point", "Crystal Ford",
    "Torrent Cliffs", "Water Lantern Spot", "Otter Holt", "Smuggler/’s Barge",
    "Reed Boat Dock", "Drowned Altar", "River Witch Raft", "Crocodile Bend",
    "Singing Falls", "Fisherfolk Camp", "Logjam Shelter", "Sunken Bridge Piles",
    "Boathouse Ruins", "Riverside Monolith", "Damaged Canal Gate",
    "Flood Marker Obelisk", "Leaning Pier", "Mudflat Trail", "Catfish Pond",
    "Drifting Effigies", "Rope Ferry", "Tide-Touched Root",
    "Waterside Offering Basket", "Stone Skip Hollow", "Spring Maw",
    "Torrent Shrine",
];

const EXPLORATION_FOREST: &[&str] = &[
    "Ancient Grove", "Logging Camp", "Druid Circle", "Hidden Shrine",
    "Bandit Camp", "Hunter's Lodge", "Ent Burial Site", "Forgotten Ranger Post",
    "Mushroom Ring", "Wild Orchard", "Fairy Circle", "Abandoned Cabin",
    "Elf Encampment", "Forest Beacon", "Thorn Thicket", "Animal Den",
    "Overgrown Path",
];

const EXPLORATION_PLAINS: &[&str] = &[
    "Village", "Trading Post", "Windmill", "Stone Circle", "Battlefield",
    "Crossroads Inn", "Grain Silo", "Horse Ranch", "Ranger's Camp",
    "Ruined Watchpost", "Fallow Field", "Wandering Caravan", "Hilltop Altar",
    "Nomad Stones", "Weathered Statue", "Open-Air Market",
];

const EXPLORATION_MOUNTAINS: &[&str] = &[
    "Mine", "Dwarven Outpost", "Cave System", "Observatory", "Dragon Lair",
    "Ancient Fortress", "Avalanche Path", "Goat Trail", "Glacier Crack",
    "Monastery in the Peaks", "Collapsed Tunnel", "Meteor Crater",
    "Hermit's Peak", "Frozen Waterfall", "Crystal Cavern", "Abandoned Lift",
];

const EXPLORATION_HILLS: &[&str] = &[
    "Watchtower", "Shepherd's Hut", "Burial Mound", "Old Ruins",
    "Hillside Village", "Stone Quarry", "Smuggler's Tunnel", "Rolling Cairns",
    "Wind-Cut Pass", "Hilltop Shrine", "Scout Post", "Overgrown Barrows",
    "Thistle Patch", "Crumbling Mill", "Stone Circles", "Bandit Lookout",
];

const EXPLORATION_SWAMP: &[&str] = &[
    "Witch's Hut", "Alchemist Garden", "Sunken Temple", "Will O' Wisp Grove",
    "Bog Iron Mine", "Floating Dock", "Leech Pond", "Sunken Library",
    "Ghoul Tree", "Fungal Bog", "Croaking Circle", "Rotting Cabin", "Reed Maze",
    "Alligator Nest", "Fog Totem",
];

const EXPLORATION_DESERT: &[&str] = &[
    "Oasis", "Nomad Camp", "Buried Ruins", "Salt Mine", "Mirage Pool",
    "Sandstone Cliffs", "Camel Graveyard", "Wind-Cut Canyon", "Scorpion Nest",
    "Crumbling Watchtower", "Sand Trap Dunes", "Starfall Crater", "Glass Field",
    "Ancient Aquifer", "Whispering Monolith",
];

const EXPLORATION_OCEAN: &[&str] = &[
    "Shipwreck", "Coral Reef", "Sea Cave", "Lighthouse", "Fishing Village",
    "Hidden Cove", "Kelp Forest", "Siren Rocks", "Whale Bones",
    "Sunken Observatory", "Smuggler's Shipwreck", "Pearl Diver's Dock",
    "Tide Pool Maze", "Shimmering Whirlpool", "Crab Shell Isles",
];

const EXPLORATION_RIVER: &[&str] = &[
    "Bridge", "Ferry Crossing", "Watermill", "Fishing Spot", "River Port",
    "Sacred Spring", "Log Raft Camp", "Flooded Shrine", "Rapids Watch",
    "Eel Trap Weir", "River Troll Nest", "Old Dam Ruins", "Mist Dock",
    "Whispering Brook", "Floating Market", "Fishbone Weir",
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_builtin_catalogs_cover_every_biome() {
        for biome in Biome::iter() {
            assert!(!FeatureCatalog::world().features(biome).is_empty());
            assert!(!FeatureCatalog::exploration().features(biome).is_empty());
        }
        assert_eq!(FeatureCatalog::world().features(Biome::Forest).len(), 50);
        assert_eq!(
            FeatureCatalog::exploration().features(Biome::Swamp)[0],
            "Witch's Hut"
        );
    }

    #[test]
    fn test_missing_biome_is_empty() {
        let mut catalog = FeatureCatalog::default();
        catalog.set(Biome::Desert, vec!["Oasis".to_string()]);
        assert_eq!(catalog.features(Biome::Desert), ["Oasis".to_string()]);
        assert!(catalog.features(Biome::Ocean).is_empty());
    }
}
