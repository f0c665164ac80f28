// Subset of the jdecked/twemoji 15.1.0 asset listing, sorted by filename stem.
// Each entry is the hex code points of one emoji sequence joined by '-', with
// no extension; the directory and extension are chosen per Format at build
// time. Bucket priority (longest sequence first) is enforced when the match
// index is built, so file order here carries no matching semantics.
pub const OFFICIAL_CDN: &str = "https://cdn.jsdelivr.net/gh/jdecked/twemoji@15.1.0/assets/";

pub(crate) static TWEMOJI_FILES: &[&str] = &[
    "1f004",
    "1f0cf",
    "1f170",
    "1f171",
    "1f17e",
    "1f17f",
    "1f18e",
    "1f191",
    "1f192",
    "1f193",
    "1f194",
    "1f195",
    "1f196",
    "1f197",
    "1f198",
    "1f199",
    "1f19a",
    "1f1e6-1f1fa",
    "1f1e7-1f1f7",
    "1f1e8-1f1e6",
    "1f1e9-1f1ea",
    "1f1ea-1f1f8",
    "1f1eb-1f1f7",
    "1f1ec-1f1e7",
    "1f1ee-1f1f9",
    "1f1ef-1f1f5",
    "1f1f0-1f1f7",
    "1f1fa-1f1f8",
    "1f30d",
    "1f30e",
    "1f30f",
    "1f310",
    "1f311",
    "1f313",
    "1f314",
    "1f315",
    "1f319",
    "1f31f",
    "1f320",
    "1f32d",
    "1f330",
    "1f331",
    "1f337",
    "1f344",
    "1f34a",
    "1f34b",
    "1f354",
    "1f355",
    "1f37a",
    "1f382",
    "1f389",
    "1f393",
    "1f3a8",
    "1f3ae",
    "1f3c6",
    "1f3f3",
    "1f3f3-fe0f-200d-1f308",
    "1f3f4",
    "1f3f4-200d-2620-fe0f",
    "1f408",
    "1f408-200d-2b1b",
    "1f415",
    "1f415-200d-1f9ba",
    "1f426",
    "1f426-200d-2b1b",
    "1f431",
    "1f436",
    "1f43b",
    "1f43b-200d-2744-fe0f",
    "1f440",
    "1f442",
    "1f44b",
    "1f44b-1f3fb",
    "1f44b-1f3fc",
    "1f44b-1f3fd",
    "1f44b-1f3fe",
    "1f44b-1f3ff",
    "1f44d",
    "1f44d-1f3fb",
    "1f44d-1f3fc",
    "1f44d-1f3fd",
    "1f44d-1f3fe",
    "1f44d-1f3ff",
    "1f44f",
    "1f450",
    "1f466",
    "1f467",
    "1f468",
    "1f468-200d-1f469-200d-1f466",
    "1f468-200d-1f4bb",
    "1f469",
    "1f469-200d-1f680",
    "1f47b",
    "1f480",
    "1f4a1",
    "1f4a8",
    "1f4a9",
    "1f4af",
    "1f4bb",
    "1f4da",
    "1f4dd",
    "1f4e7",
    "1f4f1",
    "1f525",
    "1f528",
    "1f600",
    "1f601",
    "1f602",
    "1f603",
    "1f604",
    "1f605",
    "1f606",
    "1f609",
    "1f60a",
    "1f60d",
    "1f60e",
    "1f610",
    "1f614",
    "1f618",
    "1f621",
    "1f622",
    "1f62d",
    "1f62e",
    "1f62e-200d-1f4a8",
    "1f631",
    "1f633",
    "1f637",
    "1f642",
    "1f643",
    "1f644",
    "1f64f",
    "1f680",
    "1f6ab",
    "1f6b2",
    "1f6e0",
    "1f916",
    "1f918",
    "1f923",
    "1f937",
    "1f942",
    "1f973",
    "1f9a4",
    "1f9e1",
    "1fae0",
    "203c",
    "2049",
    "2122",
    "2139",
    "2194",
    "2195",
    "2196",
    "2197",
    "2198",
    "2199",
    "21a9",
    "21aa",
    "23-20e3",
    "231a",
    "231b",
    "2328",
    "23e9",
    "23ea",
    "23eb",
    "23ec",
    "23f0",
    "23f1",
    "23f2",
    "23f3",
    "24c2",
    "25aa",
    "25ab",
    "25b6",
    "25c0",
    "25fb",
    "25fc",
    "25fd",
    "25fe",
    "2600",
    "2601",
    "2602",
    "2603",
    "2604",
    "260e",
    "2611",
    "2614",
    "2615",
    "2618",
    "261d",
    "261d-1f3fb",
    "261d-1f3fc",
    "261d-1f3fd",
    "261d-1f3fe",
    "261d-1f3ff",
    "2620",
    "2622",
    "2623",
    "2626",
    "262a",
    "262e",
    "262f",
    "2638",
    "2639",
    "263a",
    "2640",
    "2642",
    "2648",
    "2649",
    "264a",
    "264b",
    "264c",
    "264d",
    "264e",
    "264f",
    "2650",
    "2651",
    "2652",
    "2653",
    "265f",
    "2660",
    "2663",
    "2665",
    "2666",
    "2668",
    "267b",
    "267e",
    "267f",
    "2692",
    "2693",
    "2694",
    "2695",
    "2696",
    "2697",
    "2699",
    "26a0",
    "26a1",
    "26aa",
    "26ab",
    "26b0",
    "26b1",
    "26bd",
    "26be",
    "26c4",
    "26c5",
    "26ce",
    "26cf",
    "26d1",
    "26d4",
    "26ea",
    "26f2",
    "26f3",
    "26f5",
    "26fa",
    "26fd",
    "2702",
    "2705",
    "2708",
    "2709",
    "270a",
    "270b",
    "270c",
    "270d",
    "270f",
    "2712",
    "2714",
    "2716",
    "271d",
    "2721",
    "2728",
    "2733",
    "2734",
    "2744",
    "2747",
    "274c",
    "274e",
    "2753",
    "2754",
    "2755",
    "2757",
    "2763",
    "2764",
    "2764-fe0f-200d-1f525",
    "2764-fe0f-200d-1fa79",
    "2795",
    "2796",
    "2797",
    "27a1",
    "27b0",
    "27bf",
    "2934",
    "2935",
    "2a-20e3",
    "2b05",
    "2b06",
    "2b07",
    "2b1b",
    "2b1c",
    "2b50",
    "2b55",
    "30-20e3",
    "3030",
    "303d",
    "31-20e3",
    "32-20e3",
    "3297",
    "3299",
    "33-20e3",
    "34-20e3",
    "35-20e3",
    "36-20e3",
    "37-20e3",
    "38-20e3",
    "39-20e3",
    "a9",
    "ae",
];
