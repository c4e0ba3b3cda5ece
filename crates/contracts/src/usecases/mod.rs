pub mod u501_safety_assistant;
